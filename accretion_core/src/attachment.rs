// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-surface attachment state machine.
//!
//! A [`RenderSurfaceAttachment`] mediates between two event sources that
//! arrive independently and in any interleaving: the owner's intent to render
//! (`attach`/`detach`) and the platform's surface readiness
//! ([`SurfaceLifecycle`] events). Whatever the interleaving, the attached
//! renderer only ever observes a well-formed
//! create → \[resize\]* → destroy sequence.
//!
//! # States and transitions
//!
//! | State | Event | Action | Next state |
//! |---|---|---|---|
//! | `Detached` | `attach(r)` | install `r`; connect if a surface exists | `AttachedConnected` or `AttachedNoSurface` |
//! | `AttachedNoSurface` | surface available | forward `surface_created` | `AttachedConnected` |
//! | `AttachedConnected` | surface resized | forward `surface_changed` | `AttachedConnected` |
//! | `AttachedConnected` | surface unavailable | forward `surface_destroyed` | `AttachedNoSurface` |
//! | attached (either) | `detach()` | forward `surface_destroyed` if connected; remove renderer | `Detached` |
//! | attached (either) | `attach(r2)` | `detach_from_surface` on the old renderer, then as `Detached` + `attach(r2)` | per row above |
//! | `Detached` | surface events | bookkeeping only, no renderer calls | `Detached` |
//!
//! # Exclusivity
//!
//! At most one renderer is installed at a time, enforced through ownership:
//! [`attach`](RenderSurfaceAttachment::attach) takes the renderer by value
//! and returns any displaced predecessor;
//! [`detach`](RenderSurfaceAttachment::detach) returns the renderer it
//! removed so the owner can attach it elsewhere later.
//!
//! # Threading
//!
//! All methods must be called from the single UI-affine thread that owns the
//! attachment; there is no internal locking, no method blocks, and every
//! transition completes before the triggering call returns. Cross-thread
//! completions must be re-posted onto that thread by the caller (the
//! `accretion_host` crate provides a task queue for exactly this).

use crate::renderer::Renderer;
use crate::surface::{SurfaceLifecycle, SurfaceSize};
use crate::trace::{AttachEvent, DetachEvent, ResizeEvent, Tracer};

/// The three observable states of an attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentState {
    /// No renderer installed. Surface availability is still tracked.
    Detached,
    /// A renderer is installed but no surface exists yet (or the platform
    /// took the surface away).
    AttachedNoSurface,
    /// A renderer is installed and holds the current surface.
    AttachedConnected,
}

/// What to do with resize events that arrive while not connected.
///
/// The platform contract usually guarantees that the current size is
/// redelivered once a surface consumer connects, which makes dropping early
/// resize events safe. Hosts where that guarantee does not hold select
/// [`ReplayLastSize`](Self::ReplayLastSize) instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizePolicy {
    /// Drop resize events outside `AttachedConnected`; trust the platform to
    /// redeliver the latest size after connection.
    #[default]
    TrustRedelivery,
    /// Cache the last reported size and replay it synchronously on every
    /// transition into `AttachedConnected`. The cache survives surface
    /// destruction; a stale replay is immediately corrected by the next
    /// genuine resize.
    ReplayLastSize,
}

/// Pairs one renderer with one surface-bearing widget, keeping both sides
/// consistent across arbitrary event interleavings.
///
/// One instance exists per concrete surface widget. Platform glue drives it
/// through its [`SurfaceLifecycle`] impl; the owner drives it through
/// [`attach`](Self::attach) and [`detach`](Self::detach).
pub struct RenderSurfaceAttachment<R: Renderer> {
    renderer: Option<R>,
    surface: Option<R::Handle>,
    policy: ResizePolicy,
    last_size: Option<SurfaceSize>,
    tracer: Tracer,
}

impl<R: Renderer> core::fmt::Debug for RenderSurfaceAttachment<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderSurfaceAttachment")
            .field("state", &self.state())
            .field("policy", &self.policy)
            .field("last_size", &self.last_size)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> Default for RenderSurfaceAttachment<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> RenderSurfaceAttachment<R> {
    /// Creates a detached attachment with no surface and the default
    /// [`ResizePolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ResizePolicy::default())
    }

    /// Creates a detached attachment with the given resize policy.
    #[must_use]
    pub fn with_policy(policy: ResizePolicy) -> Self {
        Self {
            renderer: None,
            surface: None,
            policy,
            last_size: None,
            tracer: Tracer::none(),
        }
    }

    /// Installs a trace sink for attachment diagnostics.
    pub fn set_tracer(&mut self, tracer: Tracer) {
        self.tracer = tracer;
    }

    /// Mutable access to the installed tracer, so layers built on top of the
    /// attachment (widgets, host containers) can emit their own events into
    /// the same sink.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// The current state, derived from the renderer and surface slots.
    #[must_use]
    pub fn state(&self) -> AttachmentState {
        match (self.renderer.is_some(), self.surface.is_some()) {
            (false, _) => AttachmentState::Detached,
            (true, false) => AttachmentState::AttachedNoSurface,
            (true, true) => AttachmentState::AttachedConnected,
        }
    }

    /// True between a platform surface-available event and the matching
    /// surface-unavailable event, regardless of attachment.
    #[must_use]
    pub fn is_surface_available(&self) -> bool {
        self.surface.is_some()
    }

    /// True while a renderer is installed.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.renderer.is_some()
    }

    /// Shared access to the installed renderer, if any.
    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    /// Installs `renderer` and, if a surface is available, connects it
    /// immediately.
    ///
    /// If another renderer was installed, it is told to
    /// [`detach_from_surface`](Renderer::detach_from_surface) first and
    /// returned to the caller; the new renderer receives no callback until
    /// the old one has been fully displaced.
    pub fn attach(&mut self, renderer: R) -> Option<R> {
        let mut displaced = self.renderer.take();
        if let Some(previous) = displaced.as_mut() {
            previous.detach_from_surface();
        }

        self.renderer = Some(renderer);
        let connected_immediately = self.surface.is_some();
        if connected_immediately {
            self.connect_surface_to_renderer();
        }
        self.tracer.attach(&AttachEvent {
            displaced_previous: displaced.is_some(),
            connected_immediately,
        });
        displaced
    }

    /// Removes the installed renderer, telling it the surface is gone first
    /// if it was connected, and returns it.
    ///
    /// Calling this with nothing attached is benign: it returns `None` and
    /// emits a redundant-detach diagnostic. It is always safe to call,
    /// whatever the current state; this is the cancellation primitive.
    pub fn detach(&mut self) -> Option<R> {
        let Some(mut renderer) = self.renderer.take() else {
            self.tracer.redundant_detach();
            return None;
        };

        let was_connected = self.surface.is_some();
        if was_connected {
            renderer.surface_destroyed();
            self.tracer.disconnect();
        }
        self.tracer.detach(&DetachEvent { was_connected });
        Some(renderer)
    }

    /// Forwards `surface_created` (and, under
    /// [`ResizePolicy::ReplayLastSize`], the cached size) to the renderer.
    ///
    /// Calling this without both a renderer and a surface is a
    /// programming-contract violation: the public transitions above make it
    /// unreachable.
    fn connect_surface_to_renderer(&mut self) {
        debug_assert!(
            self.renderer.is_some() && self.surface.is_some(),
            "connect requires an installed renderer and a live surface"
        );
        if let (Some(renderer), Some(handle)) = (self.renderer.as_mut(), self.surface.as_ref()) {
            renderer.surface_created(handle);
            self.tracer.connect();
            if self.policy == ResizePolicy::ReplayLastSize
                && let Some(size) = self.last_size
            {
                renderer.surface_changed(size.width, size.height);
                self.tracer.resize(&ResizeEvent {
                    size,
                    forwarded: true,
                });
            }
        }
    }

    /// Forwards a resize to the renderer. Same contract as
    /// [`connect_surface_to_renderer`](Self::connect_surface_to_renderer).
    fn change_surface_size(&mut self, size: SurfaceSize) {
        debug_assert!(
            self.renderer.is_some() && self.surface.is_some(),
            "resize forwarding requires an installed renderer and a live surface"
        );
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.surface_changed(size.width, size.height);
        }
    }

    /// Forwards `surface_destroyed` to the renderer. Same contract as
    /// [`connect_surface_to_renderer`](Self::connect_surface_to_renderer).
    fn disconnect_surface_from_renderer(&mut self) {
        debug_assert!(
            self.renderer.is_some() && self.surface.is_some(),
            "disconnect requires an installed renderer and a live surface"
        );
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.surface_destroyed();
            self.tracer.disconnect();
        }
    }
}

impl<R: Renderer> SurfaceLifecycle for RenderSurfaceAttachment<R> {
    type Handle = R::Handle;

    fn surface_available(&mut self, handle: Self::Handle) {
        debug_assert!(
            self.surface.is_none(),
            "platform delivered surface_available twice without surface_unavailable"
        );
        self.surface = Some(handle);
        self.tracer.surface_available();
        if self.renderer.is_some() {
            self.connect_surface_to_renderer();
        }
    }

    fn surface_resized(&mut self, size: SurfaceSize) {
        if self.policy == ResizePolicy::ReplayLastSize {
            self.last_size = Some(size);
        }
        let forwarded = self.state() == AttachmentState::AttachedConnected;
        if forwarded {
            self.change_surface_size(size);
        }
        self.tracer.resize(&ResizeEvent { size, forwarded });
    }

    fn surface_unavailable(&mut self) {
        debug_assert!(
            self.surface.is_some(),
            "platform delivered surface_unavailable without a live surface"
        );
        if self.renderer.is_some() && self.surface.is_some() {
            self.disconnect_surface_from_renderer();
        }
        self.surface = None;
        self.tracer.surface_unavailable();
    }
}
