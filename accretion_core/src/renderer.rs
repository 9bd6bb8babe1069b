// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer capability contract.
//!
//! The core never implements a renderer; it only calls one. Platform
//! integrations (and test doubles) implement [`Renderer`] and hand an
//! instance to
//! [`RenderSurfaceAttachment::attach`](crate::attachment::RenderSurfaceAttachment::attach).
//!
//! All methods are fire-and-forget: no return values, and the attachment
//! assumes none of them block. The surface handle is an associated type so
//! each platform chooses its own opaque representation (an `ANativeWindow`
//! pointer wrapper, a DOM canvas id, a test integer).

/// Consumes a platform surface and produces frames onto it.
///
/// The attachment guarantees the call sequence is always well-formed:
/// `surface_created` is never delivered twice without an intervening
/// `surface_destroyed`, `surface_changed` only arrives between the two, and
/// `detach_from_surface` tells a displaced renderer to sever any remaining
/// ties before another renderer takes over the same attachment.
pub trait Renderer {
    /// Opaque platform surface handle passed to [`surface_created`].
    ///
    /// [`surface_created`]: Renderer::surface_created
    type Handle;

    /// A usable surface now exists; the renderer may begin producing frames.
    fn surface_created(&mut self, handle: &Self::Handle);

    /// The current surface changed size.
    ///
    /// Only delivered while a `surface_created` is outstanding.
    fn surface_changed(&mut self, width: u32, height: u32);

    /// The surface is gone; the renderer must stop producing frames.
    fn surface_destroyed(&mut self);

    /// The renderer is being displaced from its attachment (another renderer
    /// is taking over, or the owner is shutting the pairing down for good).
    fn detach_from_surface(&mut self);
}
