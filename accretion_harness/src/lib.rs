// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable test doubles and sequence checking for attachment tests.
//!
//! [`RecordingRenderer`] appends every renderer call it receives to a
//! [`SharedCallLog`], which stays inspectable while the renderer itself is
//! owned by an attachment. [`validate_sequence`] checks a recorded log
//! against the well-formedness contract the attachment guarantees: no double
//! create, resizes only while a surface is live, every destroy paired with a
//! create. [`run_script`] replays an arbitrary interleaving of owner and
//! platform events against a fresh attachment.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use accretion_core::attachment::RenderSurfaceAttachment;
use accretion_core::renderer::Renderer;
use accretion_core::surface::{SurfaceLifecycle, SurfaceSize};

/// One call observed by a [`RecordingRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RendererCall {
    /// `surface_created` with the given handle.
    SurfaceCreated(u64),
    /// `surface_changed` with width and height.
    SurfaceChanged(u32, u32),
    /// `surface_destroyed`.
    SurfaceDestroyed,
    /// `detach_from_surface`.
    DetachFromSurface,
}

/// Renderer-call log shared between a test and the renderers it hands out.
///
/// Entries are `(renderer id, call)` so a single log can order calls across
/// renderers, which is what re-attachment ordering assertions need.
#[derive(Clone, Debug, Default)]
pub struct SharedCallLog {
    entries: Rc<RefCell<Vec<(u8, RendererCall)>>>,
}

impl SharedCallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(u8, RendererCall)> {
        self.entries.borrow().clone()
    }

    /// Recorded calls for one renderer id, in order.
    #[must_use]
    pub fn calls_for(&self, id: u8) -> Vec<RendererCall> {
        self.entries
            .borrow()
            .iter()
            .filter(|(i, _)| *i == id)
            .map(|(_, c)| *c)
            .collect()
    }

    fn push(&self, id: u8, call: RendererCall) {
        self.entries.borrow_mut().push((id, call));
    }
}

/// A [`Renderer`] that records every call into a [`SharedCallLog`].
#[derive(Debug)]
pub struct RecordingRenderer {
    id: u8,
    log: SharedCallLog,
}

impl RecordingRenderer {
    /// Creates a renderer recording into `log` under `id`.
    #[must_use]
    pub fn new(id: u8, log: &SharedCallLog) -> Self {
        Self {
            id,
            log: log.clone(),
        }
    }

    /// The id this renderer records under.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }
}

impl Renderer for RecordingRenderer {
    type Handle = u64;

    fn surface_created(&mut self, handle: &u64) {
        self.log.push(self.id, RendererCall::SurfaceCreated(*handle));
    }

    fn surface_changed(&mut self, width: u32, height: u32) {
        self.log
            .push(self.id, RendererCall::SurfaceChanged(width, height));
    }

    fn surface_destroyed(&mut self) {
        self.log.push(self.id, RendererCall::SurfaceDestroyed);
    }

    fn detach_from_surface(&mut self) {
        self.log.push(self.id, RendererCall::DetachFromSurface);
    }
}

/// A violation of the renderer call contract found by [`validate_sequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// `surface_created` delivered while a create was already outstanding
    /// for the same renderer.
    DoubleCreate {
        /// Index of the offending log entry.
        index: usize,
    },
    /// `surface_changed` outside a create/destroy pair.
    ResizeWithoutSurface {
        /// Index of the offending log entry.
        index: usize,
    },
    /// `surface_destroyed` without an outstanding create.
    DestroyWithoutSurface {
        /// Index of the offending log entry.
        index: usize,
    },
    /// A renderer received `surface_created` while another renderer still
    /// held the surface.
    OverlappingRenderers {
        /// Index of the offending log entry.
        index: usize,
    },
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DoubleCreate { index } => {
                write!(f, "double surface_created at log index {index}")
            }
            Self::ResizeWithoutSurface { index } => {
                write!(f, "surface_changed without a live surface at log index {index}")
            }
            Self::DestroyWithoutSurface { index } => {
                write!(f, "surface_destroyed without a live surface at log index {index}")
            }
            Self::OverlappingRenderers { index } => {
                write!(f, "two renderers held the surface at log index {index}")
            }
        }
    }
}

/// Checks a recorded call log for the well-formedness contract.
///
/// Per renderer: `surface_created` at most once without an intervening
/// `surface_destroyed` or `detach_from_surface`, resizes and destroys only
/// while a create is outstanding. Globally: at most one renderer holds the
/// surface at a time. A renderer still holding the surface at the end of the
/// log is fine (it is simply still attached).
pub fn validate_sequence(calls: &[(u8, RendererCall)]) -> Result<(), SequenceError> {
    // Which renderer currently holds the surface, if any.
    let mut holder: Option<u8> = None;

    for (index, (id, call)) in calls.iter().enumerate() {
        match call {
            RendererCall::SurfaceCreated(_) => match holder {
                Some(h) if h == *id => return Err(SequenceError::DoubleCreate { index }),
                Some(_) => return Err(SequenceError::OverlappingRenderers { index }),
                None => holder = Some(*id),
            },
            RendererCall::SurfaceChanged(..) => {
                if holder != Some(*id) {
                    return Err(SequenceError::ResizeWithoutSurface { index });
                }
            }
            RendererCall::SurfaceDestroyed => {
                if holder != Some(*id) {
                    return Err(SequenceError::DestroyWithoutSurface { index });
                }
                holder = None;
            }
            RendererCall::DetachFromSurface => {
                // Displacement severs whatever the renderer still held.
                if holder == Some(*id) {
                    holder = None;
                }
            }
        }
    }
    Ok(())
}

/// One step of a scripted interleaving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptEvent {
    /// Owner installs a fresh recording renderer (ids assigned 1, 2, ...).
    Attach,
    /// Owner detaches.
    Detach,
    /// Platform creates a surface with the given handle.
    SurfaceCreated(u64),
    /// Platform resizes to the given width and height.
    SurfaceChanged(u32, u32),
    /// Platform destroys the surface.
    SurfaceDestroyed,
}

/// True when the platform events in `events` respect the platform contract:
/// create only while no surface exists, resize and destroy only while one
/// does. Owner events are unconstrained.
#[must_use]
pub fn is_platform_valid(events: &[ScriptEvent]) -> bool {
    let mut live = false;
    for event in events {
        match event {
            ScriptEvent::SurfaceCreated(_) => {
                if live {
                    return false;
                }
                live = true;
            }
            ScriptEvent::SurfaceChanged(..) | ScriptEvent::SurfaceDestroyed => {
                if !live {
                    return false;
                }
                if *event == ScriptEvent::SurfaceDestroyed {
                    live = false;
                }
            }
            ScriptEvent::Attach | ScriptEvent::Detach => {}
        }
    }
    true
}

/// Replays `events` against a fresh attachment and returns the call log.
///
/// Each [`ScriptEvent::Attach`] installs a new [`RecordingRenderer`] with
/// the next id; detached renderers are dropped. `events` should satisfy
/// [`is_platform_valid`].
#[must_use]
pub fn run_script(events: &[ScriptEvent]) -> SharedCallLog {
    let log = SharedCallLog::new();
    let mut attachment = RenderSurfaceAttachment::new();
    let mut next_id: u8 = 0;

    for event in events {
        match event {
            ScriptEvent::Attach => {
                next_id += 1;
                attachment.attach(RecordingRenderer::new(next_id, &log));
            }
            ScriptEvent::Detach => {
                attachment.detach();
            }
            ScriptEvent::SurfaceCreated(handle) => attachment.surface_available(*handle),
            ScriptEvent::SurfaceChanged(w, h) => {
                attachment.surface_resized(SurfaceSize::new(*w, *h));
            }
            ScriptEvent::SurfaceDestroyed => attachment.surface_unavailable(),
        }
    }
    log
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn validator_accepts_well_formed_single_renderer() {
        let calls = vec![
            (1, RendererCall::SurfaceCreated(1)),
            (1, RendererCall::SurfaceChanged(10, 10)),
            (1, RendererCall::SurfaceDestroyed),
            (1, RendererCall::SurfaceCreated(2)),
        ];
        assert_eq!(validate_sequence(&calls), Ok(()));
    }

    #[test]
    fn validator_rejects_double_create() {
        let calls = vec![
            (1, RendererCall::SurfaceCreated(1)),
            (1, RendererCall::SurfaceCreated(2)),
        ];
        assert_eq!(
            validate_sequence(&calls),
            Err(SequenceError::DoubleCreate { index: 1 })
        );
    }

    #[test]
    fn validator_rejects_orphan_resize_and_destroy() {
        assert_eq!(
            validate_sequence(&[(1, RendererCall::SurfaceChanged(1, 1))]),
            Err(SequenceError::ResizeWithoutSurface { index: 0 })
        );
        assert_eq!(
            validate_sequence(&[(1, RendererCall::SurfaceDestroyed)]),
            Err(SequenceError::DestroyWithoutSurface { index: 0 })
        );
    }

    #[test]
    fn validator_rejects_overlapping_renderers() {
        let calls = vec![
            (1, RendererCall::SurfaceCreated(1)),
            (2, RendererCall::SurfaceCreated(1)),
        ];
        assert_eq!(
            validate_sequence(&calls),
            Err(SequenceError::OverlappingRenderers { index: 1 })
        );
    }

    #[test]
    fn validator_accepts_displacement_handoff() {
        let calls = vec![
            (1, RendererCall::SurfaceCreated(1)),
            (1, RendererCall::DetachFromSurface),
            (2, RendererCall::SurfaceCreated(1)),
        ];
        assert_eq!(validate_sequence(&calls), Ok(()));
    }

    #[test]
    fn platform_validity_filter() {
        assert!(is_platform_valid(&[
            ScriptEvent::Attach,
            ScriptEvent::SurfaceCreated(1),
            ScriptEvent::SurfaceChanged(1, 1),
            ScriptEvent::SurfaceDestroyed,
            ScriptEvent::SurfaceCreated(2),
        ]));
        assert!(!is_platform_valid(&[
            ScriptEvent::SurfaceCreated(1),
            ScriptEvent::SurfaceCreated(2),
        ]));
        assert!(!is_platform_valid(&[ScriptEvent::SurfaceChanged(1, 1)]));
        assert!(!is_platform_valid(&[ScriptEvent::SurfaceDestroyed]));
    }

    #[test]
    fn script_replays_the_canonical_scenario() {
        let log = run_script(&[
            ScriptEvent::Attach,
            ScriptEvent::SurfaceCreated(7),
            ScriptEvent::SurfaceChanged(100, 200),
            ScriptEvent::Detach,
        ]);
        assert_eq!(
            log.calls(),
            vec![
                (1, RendererCall::SurfaceCreated(7)),
                (1, RendererCall::SurfaceChanged(100, 200)),
                (1, RendererCall::SurfaceDestroyed),
            ]
        );
    }
}
