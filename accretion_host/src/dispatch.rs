// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-dispatch onto the UI-affine thread.
//!
//! The attachment state machine is single-threaded by contract: every call
//! into it must happen on the one thread that owns it. Background work
//! (resource loading, engine warm-up) completes elsewhere and must be
//! re-posted before it touches attachment state. [`UiTaskQueue`] lives on
//! the UI thread and is drained from its event loop; [`UiHandle`]s are cheap
//! `Clone + Send + Sync` posting endpoints for everything else.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

type Task = Box<dyn FnOnce() + Send>;

/// Task queue owned and drained by the UI-affine thread.
pub struct UiTaskQueue {
    tx: Sender<Task>,
    rx: Receiver<Task>,
}

impl core::fmt::Debug for UiTaskQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UiTaskQueue").finish_non_exhaustive()
    }
}

impl Default for UiTaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl UiTaskQueue {
    /// Creates an empty queue. Create it on the UI thread and keep it there.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Returns a posting handle usable from any thread.
    #[must_use]
    pub fn handle(&self) -> UiHandle {
        UiHandle {
            tx: self.tx.clone(),
        }
    }

    /// Runs every task queued so far, in post order, and returns how many
    /// ran. Tasks posted while draining run in the same drain.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        loop {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return ran,
            }
        }
    }
}

/// Posts tasks to a [`UiTaskQueue`] from any thread.
#[derive(Clone)]
pub struct UiHandle {
    tx: Sender<Task>,
}

impl core::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UiHandle").finish_non_exhaustive()
    }
}

impl UiHandle {
    /// Queues `task` to run on the UI thread's next drain.
    ///
    /// Returns `false` if the queue has been dropped (host shut down); the
    /// task is discarded in that case.
    pub fn post<F: FnOnce() + Send + 'static>(&self, task: F) -> bool {
        self.tx.send(Box::new(task)).is_ok()
    }
}
