// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-container flicker suppression.
//!
//! Between "the surface exists" and "the renderer has presented a real
//! pixel", the raw surface shows black or garbage. The widget hides its own
//! rectangle by staying transparent (see
//! [`SurfaceWidget`](crate::widget::SurfaceWidget)); the [`FlickerGuard`]
//! covers the whole host container for the same window, painted to match the
//! host window's background so its removal is visually seamless.
//!
//! Backdrop resolution is all-or-nothing: if the host cannot report its
//! window background, the guard stays unpainted and a brief gap is accepted.
//! Guessing a "least intrusive" color is explicitly not done — there is no
//! accurate guess.

use std::cell::RefCell;
use std::rc::Rc;

use accretion_core::notifier::FirstFrameListener;

/// Resolves the host window's background appearance.
///
/// The backdrop type is opaque to this crate: a drawable, a color, a theme
/// token — whatever the host's view system paints with.
pub trait BackdropSource {
    /// Host-specific background appearance.
    type Backdrop;

    /// The window background to replicate, or `None` if the host cannot
    /// determine one.
    fn window_background(&self) -> Option<Self::Backdrop>;
}

/// Visibility of the guard overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardState {
    /// The overlay covers the container.
    Visible,
    /// The overlay has been removed. Terminal.
    Hidden,
}

/// Opaque overlay shown from container creation until the first frame.
///
/// Starts [`Visible`](GuardState::Visible) and transitions to
/// [`Hidden`](GuardState::Hidden) exactly once; it never becomes visible
/// again for the life of the container instance, which is what turns the
/// notifier's at-least-once delivery into an exactly-once visual effect.
#[derive(Debug)]
pub struct FlickerGuard<B> {
    backdrop: Option<B>,
    state: GuardState,
}

impl<B> FlickerGuard<B> {
    /// Creates a visible guard with an already-resolved backdrop (or none).
    #[must_use]
    pub fn new(backdrop: Option<B>) -> Self {
        Self {
            backdrop,
            state: GuardState::Visible,
        }
    }

    /// Creates a visible guard, resolving the backdrop from `source`.
    #[must_use]
    pub fn resolve_from<S: BackdropSource<Backdrop = B>>(source: &S) -> Self {
        Self::new(source.window_background())
    }

    /// Current overlay state.
    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// True while the overlay covers the container.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == GuardState::Visible
    }

    /// The resolved backdrop, if resolution succeeded.
    #[must_use]
    pub fn backdrop(&self) -> Option<&B> {
        self.backdrop.as_ref()
    }

    /// Shows the overlay. Idempotent, and ignored once hidden: hiding is
    /// one-directional.
    pub fn show(&mut self) {
        // Already visible or already terminal; nothing to do either way.
    }

    /// Hides the overlay. Idempotent.
    pub fn hide(&mut self) {
        self.state = GuardState::Hidden;
    }
}

/// Adapts a shared [`FlickerGuard`] into a [`FirstFrameListener`].
///
/// Register the listener on the surface widget; the guard hides on the first
/// notification and stays hidden on any repeat.
pub struct HideOnFirstFrame<B> {
    guard: Rc<RefCell<FlickerGuard<B>>>,
}

impl<B> core::fmt::Debug for HideOnFirstFrame<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HideOnFirstFrame").finish_non_exhaustive()
    }
}

impl<B> HideOnFirstFrame<B> {
    /// Creates a listener that hides `guard` on the first frame.
    #[must_use]
    pub fn new(guard: Rc<RefCell<FlickerGuard<B>>>) -> Self {
        Self { guard }
    }
}

impl<B> FirstFrameListener for HideOnFirstFrame<B> {
    fn on_first_frame(&self) {
        self.guard.borrow_mut().hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackdrop(Option<u32>);

    impl BackdropSource for FixedBackdrop {
        type Backdrop = u32;

        fn window_background(&self) -> Option<u32> {
            self.0
        }
    }

    #[test]
    fn resolves_backdrop_when_available() {
        let guard = FlickerGuard::resolve_from(&FixedBackdrop(Some(0x00FF_00FF)));
        assert!(guard.is_visible());
        assert_eq!(guard.backdrop(), Some(&0x00FF_00FF));
    }

    #[test]
    fn unresolvable_backdrop_stays_unpainted() {
        // No heuristic color substitution: unresolved means unpainted.
        let guard = FlickerGuard::resolve_from(&FixedBackdrop(None));
        assert!(guard.is_visible());
        assert_eq!(guard.backdrop(), None);
    }

    #[test]
    fn hide_is_one_directional() {
        let mut guard: FlickerGuard<u32> = FlickerGuard::new(None);
        guard.hide();
        assert_eq!(guard.state(), GuardState::Hidden);

        guard.show();
        assert_eq!(guard.state(), GuardState::Hidden, "show after hide is ignored");

        guard.hide();
        assert_eq!(guard.state(), GuardState::Hidden, "hide is idempotent");
    }

    #[test]
    fn listener_hides_shared_guard_once() {
        let guard = Rc::new(RefCell::new(FlickerGuard::<u32>::new(Some(7))));
        let listener = HideOnFirstFrame::new(guard.clone());

        listener.on_first_frame();
        assert!(!guard.borrow().is_visible());

        // Repeat notifications are absorbed by the one-directional guard.
        listener.on_first_frame();
        assert!(!guard.borrow().is_visible());
    }
}
