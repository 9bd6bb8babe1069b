// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface geometry and the platform-event handler capability.
//!
//! Platform windowing glue (a `SurfaceHolder` callback, a Wayland listener,
//! a test script) delivers surface events through the fixed
//! [`SurfaceLifecycle`] interface rather than through ad-hoc closures. The
//! attachment implements it directly; widget types that wrap an attachment
//! implement it by forwarding.

/// Size of a surface in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Creates a size from a width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Receiver for platform surface events.
///
/// The three methods mirror the platform contract: a surface becomes
/// available exactly once, may resize any number of times while available,
/// and then becomes unavailable. The implementor is responsible for its own
/// bookkeeping when events arrive while no renderer is attached; see
/// [`RenderSurfaceAttachment`](crate::attachment::RenderSurfaceAttachment).
pub trait SurfaceLifecycle {
    /// Opaque platform surface handle.
    type Handle;

    /// The platform created a drawable surface.
    fn surface_available(&mut self, handle: Self::Handle);

    /// The current surface changed size.
    fn surface_resized(&mut self, size: SurfaceSize);

    /// The platform destroyed the surface.
    fn surface_unavailable(&mut self);
}
