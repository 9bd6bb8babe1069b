// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the attachment lifecycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! attachment calls at each transition. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed `TraceSink`. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! The benign-warning channel of the error taxonomy also flows through here:
//! a redundant `detach` is reported via
//! [`on_redundant_detach`](TraceSink::on_redundant_detach) rather than through
//! a logging facade, keeping the core free of `std`.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

#[cfg(feature = "trace")]
use alloc::boxed::Box;

use crate::surface::SurfaceSize;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a renderer is installed on an attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttachEvent {
    /// A previously attached renderer was displaced first.
    pub displaced_previous: bool,
    /// A surface was available, so the renderer was connected immediately.
    pub connected_immediately: bool,
}

/// Emitted when a renderer is removed from an attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DetachEvent {
    /// The renderer was connected to a live surface, so it received a
    /// `surface_destroyed` before removal.
    pub was_connected: bool,
}

/// Emitted for every platform resize event the attachment observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeEvent {
    /// The reported size.
    pub size: SurfaceSize,
    /// The event was forwarded to the renderer (attachment was connected).
    /// Dropped events are redelivered or replayed per the attachment's
    /// [`ResizePolicy`](crate::attachment::ResizePolicy).
    pub forwarded: bool,
}

// ---------------------------------------------------------------------------
// TraceSink
// ---------------------------------------------------------------------------

/// Receives attachment lifecycle events.
///
/// Every method has a no-op default body; implement only what you need.
/// `std`-side sinks (pretty printing, Chrome trace export) live in the
/// `accretion_debug` crate.
pub trait TraceSink {
    /// A renderer was installed via `attach`.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// A renderer was removed via `detach`.
    fn on_detach(&mut self, e: &DetachEvent) {
        _ = e;
    }

    /// `detach` was called with no renderer attached. Benign, but worth a
    /// diagnostic: it usually means the owner's teardown ran twice.
    fn on_redundant_detach(&mut self) {}

    /// The platform created a surface.
    fn on_surface_available(&mut self) {}

    /// The platform destroyed the surface.
    fn on_surface_unavailable(&mut self) {}

    /// A platform resize event was observed (forwarded or dropped).
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// The renderer was handed the current surface (`surface_created`
    /// forwarded).
    fn on_connect(&mut self) {}

    /// The renderer was told the surface is gone (`surface_destroyed`
    /// forwarded).
    fn on_disconnect(&mut self) {}

    /// A first-frame notification fanned out to `listener_count` listeners.
    fn on_first_frame(&mut self, listener_count: usize) {
        _ = listener_count;
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional boxed [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DetachEvent`].
    #[inline]
    pub fn detach(&mut self, e: &DetachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_detach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a redundant-detach warning.
    #[inline]
    pub fn redundant_detach(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_redundant_detach();
        }
    }

    /// Emits a surface-available event.
    #[inline]
    pub fn surface_available(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_available();
        }
    }

    /// Emits a surface-unavailable event.
    #[inline]
    pub fn surface_unavailable(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_unavailable();
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a connect event.
    #[inline]
    pub fn connect(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_connect();
        }
    }

    /// Emits a disconnect event.
    #[inline]
    pub fn disconnect(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_disconnect();
        }
    }

    /// Emits a first-frame fan-out event.
    #[inline]
    pub fn first_frame(&mut self, listener_count: usize) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_first_frame(listener_count);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = listener_count;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct CountingSink {
        seen: Rc<RefCell<Vec<&'static str>>>,
    }

    impl TraceSink for CountingSink {
        fn on_attach(&mut self, _e: &AttachEvent) {
            self.seen.borrow_mut().push("attach");
        }

        fn on_redundant_detach(&mut self) {
            self.seen.borrow_mut().push("redundant_detach");
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = CountingSink { seen: seen.clone() };
        let mut tracer = Tracer::new(Box::new(sink));

        tracer.attach(&AttachEvent {
            displaced_previous: false,
            connected_immediately: true,
        });
        tracer.redundant_detach();
        // Default no-op methods must not panic.
        tracer.connect();

        assert_eq!(&*seen.borrow(), &["attach", "redundant_detach"]);
    }

    #[test]
    fn none_tracer_discards_everything() {
        let mut tracer = Tracer::none();
        tracer.attach(&AttachEvent {
            displaced_previous: true,
            connected_immediately: false,
        });
        tracer.first_frame(3);
    }
}
