// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface-bearing widget.
//!
//! A [`SurfaceWidget`] is the unit a host container places in its view
//! hierarchy: one attachment, one first-frame notifier, and an opacity that
//! starts at zero. The widget stays fully transparent until the renderer
//! reports its first frame, so the platform never shows the black rectangle a
//! freshly created surface would otherwise paint. Host-container-level
//! flicker suppression is layered on top by
//! [`FlickerGuard`](crate::flicker::FlickerGuard).

use std::rc::Rc;

use accretion_core::attachment::{AttachmentState, RenderSurfaceAttachment, ResizePolicy};
use accretion_core::notifier::{FirstFrameListener, FirstFrameNotifier};
use accretion_core::renderer::Renderer;
use accretion_core::surface::{SurfaceLifecycle, SurfaceSize};
use accretion_core::trace::Tracer;

/// Owns a render-surface attachment and gates its own visibility on the
/// first rendered frame.
///
/// Platform glue drives the widget through its [`SurfaceLifecycle`] impl and
/// calls [`first_frame_rendered`](Self::first_frame_rendered) when the
/// renderer signals its first frame. The owner drives
/// [`attach_to_renderer`](Self::attach_to_renderer) and
/// [`detach_from_renderer`](Self::detach_from_renderer).
pub struct SurfaceWidget<R: Renderer> {
    attachment: RenderSurfaceAttachment<R>,
    first_frame: FirstFrameNotifier,
    opacity: f32,
}

impl<R: Renderer> core::fmt::Debug for SurfaceWidget<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SurfaceWidget")
            .field("state", &self.attachment.state())
            .field("opacity", &self.opacity)
            .field("first_frame", &self.first_frame)
            .finish()
    }
}

impl<R: Renderer> Default for SurfaceWidget<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> SurfaceWidget<R> {
    /// Creates a fully transparent widget with a detached attachment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ResizePolicy::default())
    }

    /// Creates a widget whose attachment uses the given resize policy.
    #[must_use]
    pub fn with_policy(policy: ResizePolicy) -> Self {
        Self {
            attachment: RenderSurfaceAttachment::with_policy(policy),
            first_frame: FirstFrameNotifier::new(),
            opacity: 0.0,
        }
    }

    /// Installs a trace sink on the underlying attachment.
    pub fn set_tracer(&mut self, tracer: Tracer) {
        self.attachment.set_tracer(tracer);
    }

    /// Current attachment state.
    #[must_use]
    pub fn state(&self) -> AttachmentState {
        self.attachment.state()
    }

    /// Current opacity: 0.0 until the first frame, 1.0 afterwards.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Installs `renderer`, connecting it immediately if a surface exists.
    /// Returns any displaced predecessor, already severed from the surface.
    pub fn attach_to_renderer(&mut self, renderer: R) -> Option<R> {
        self.attachment.attach(renderer)
    }

    /// Tears down any active connection and returns the renderer.
    ///
    /// The widget goes transparent again so a later re-attach does not flash
    /// stale or uninitialized surface content. Calling this with nothing
    /// attached is a logged no-op.
    pub fn detach_from_renderer(&mut self) -> Option<R> {
        let renderer = self.attachment.detach();
        if renderer.is_some() {
            self.opacity = 0.0;
        }
        renderer
    }

    /// Registers a first-frame listener on this widget.
    pub fn add_first_frame_listener(&self, listener: Rc<dyn FirstFrameListener>) {
        self.first_frame.register(listener);
    }

    /// Unregisters a previously added first-frame listener.
    pub fn remove_first_frame_listener(&self, listener: &Rc<dyn FirstFrameListener>) {
        self.first_frame.unregister(listener);
    }

    /// The renderer produced its first frame on the current surface.
    ///
    /// Makes the widget opaque before fanning out, so no listener can observe
    /// a first-frame notification while the widget is still transparent.
    pub fn first_frame_rendered(&mut self) {
        self.opacity = 1.0;
        let notified = self.first_frame.notify_first_frame();
        self.attachment.tracer_mut().first_frame(notified);
    }
}

impl<R: Renderer> SurfaceLifecycle for SurfaceWidget<R> {
    type Handle = R::Handle;

    fn surface_available(&mut self, handle: Self::Handle) {
        self.attachment.surface_available(handle);
    }

    fn surface_resized(&mut self, size: SurfaceSize) {
        self.attachment.surface_resized(size);
    }

    fn surface_unavailable(&mut self) {
        self.attachment.surface_unavailable();
    }
}
