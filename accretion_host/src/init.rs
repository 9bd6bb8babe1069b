// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine-initialization context.
//!
//! Loading engine binaries and snapshots happens once per process, before
//! any entry point runs. Rather than a process-global one-shot flag, the
//! state lives in an explicit [`EngineInitContext`] passed to whatever
//! consumes it, with a checked `Uninitialized → Initializing → Ready`
//! lifecycle. Re-entry is rejected by state check, not by a static.
//!
//! The loading work itself (asset extraction, snapshot location, retries) is
//! outside this crate; callers run it between [`begin`] and [`complete`],
//! typically on a background thread with the result re-posted through
//! [`dispatch`](crate::dispatch).
//!
//! [`begin`]: EngineInitContext::begin
//! [`complete`]: EngineInitContext::complete

use std::path::PathBuf;

/// Where initialization currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitPhase {
    /// Nothing has started.
    #[default]
    Uninitialized,
    /// [`begin`](EngineInitContext::begin) was called; loading is in flight.
    Initializing,
    /// [`complete`](EngineInitContext::complete) recorded the artifacts.
    Ready,
}

/// Resolved locations produced by the loading pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitArtifacts {
    /// Root of the extracted asset bundle.
    pub bundle_path: PathBuf,
    /// Snapshot blob to boot from, when the engine runs from a snapshot.
    pub snapshot_path: Option<PathBuf>,
}

/// Why an initialization call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitError {
    /// `begin` while already initializing.
    AlreadyInitializing,
    /// `begin` after initialization finished.
    AlreadyReady,
    /// `complete` without a preceding `begin`.
    NotInitializing,
    /// `artifacts` before initialization finished.
    NotReady,
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::AlreadyInitializing => "engine initialization is already in flight",
            Self::AlreadyReady => "engine initialization already completed",
            Self::NotInitializing => "complete() called without begin()",
            Self::NotReady => "engine artifacts requested before initialization completed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for InitError {}

/// Singleton-free initialization lifecycle.
#[derive(Debug, Default)]
pub struct EngineInitContext {
    phase: InitPhase,
    artifacts: Option<InitArtifacts>,
}

impl EngineInitContext {
    /// Creates a context in [`InitPhase::Uninitialized`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> InitPhase {
        self.phase
    }

    /// Marks loading as started. Rejected unless currently uninitialized.
    pub fn begin(&mut self) -> Result<(), InitError> {
        match self.phase {
            InitPhase::Uninitialized => {
                self.phase = InitPhase::Initializing;
                Ok(())
            }
            InitPhase::Initializing => Err(InitError::AlreadyInitializing),
            InitPhase::Ready => Err(InitError::AlreadyReady),
        }
    }

    /// Records the loading result and moves to [`InitPhase::Ready`].
    pub fn complete(&mut self, artifacts: InitArtifacts) -> Result<(), InitError> {
        match self.phase {
            InitPhase::Initializing => {
                self.artifacts = Some(artifacts);
                self.phase = InitPhase::Ready;
                Ok(())
            }
            InitPhase::Uninitialized | InitPhase::Ready => Err(InitError::NotInitializing),
        }
    }

    /// The resolved artifacts, available only once ready.
    pub fn artifacts(&self) -> Result<&InitArtifacts, InitError> {
        self.artifacts.as_ref().ok_or(InitError::NotReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> InitArtifacts {
        InitArtifacts {
            bundle_path: PathBuf::from("/data/app/bundle"),
            snapshot_path: Some(PathBuf::from("/data/app/bundle/snapshot.bin")),
        }
    }

    #[test]
    fn happy_path_walks_all_three_phases() {
        let mut context = EngineInitContext::new();
        assert_eq!(context.phase(), InitPhase::Uninitialized);
        assert_eq!(context.artifacts(), Err(InitError::NotReady));

        context.begin().unwrap();
        assert_eq!(context.phase(), InitPhase::Initializing);

        context.complete(artifacts()).unwrap();
        assert_eq!(context.phase(), InitPhase::Ready);
        assert_eq!(context.artifacts().unwrap().bundle_path, PathBuf::from("/data/app/bundle"));
    }

    #[test]
    fn reentrant_begin_is_rejected() {
        let mut context = EngineInitContext::new();
        context.begin().unwrap();
        assert_eq!(context.begin(), Err(InitError::AlreadyInitializing));

        context.complete(artifacts()).unwrap();
        assert_eq!(context.begin(), Err(InitError::AlreadyReady));
    }

    #[test]
    fn complete_requires_begin() {
        let mut context = EngineInitContext::new();
        assert_eq!(
            context.complete(artifacts()),
            Err(InitError::NotInitializing)
        );
    }
}
