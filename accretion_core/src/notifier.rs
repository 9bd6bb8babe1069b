// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-frame fan-out.
//!
//! A renderer signals "first frame" once it has produced and presented at
//! least one real frame on its current surface. [`FirstFrameNotifier`] fans
//! that signal out to registered listeners so flicker-suppression overlays
//! and widget opacity can be released at the right moment.
//!
//! Fan-out is synchronous, on the thread that observed the signal, and
//! **at-least-once**: the notifier performs no de-duplication, so a renderer
//! that reports twice re-invokes every listener. Owners that need exactly-once
//! semantics de-duplicate themselves (the flicker guard does, by being
//! one-directional).
//!
//! The listener set is identity-keyed and unordered; listeners must not
//! assume any ordering among themselves. Registration and unregistration
//! during fan-out are safe: each notification iterates a snapshot taken at
//! its start.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ptr;

/// Receives the renderer's first-frame signal.
pub trait FirstFrameListener {
    /// Invoked synchronously for each first-frame notification.
    fn on_first_frame(&self);
}

/// Identity-keyed registry of [`FirstFrameListener`]s.
#[derive(Default)]
pub struct FirstFrameNotifier {
    listeners: RefCell<Vec<Rc<dyn FirstFrameListener>>>,
}

impl core::fmt::Debug for FirstFrameNotifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FirstFrameNotifier")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

fn same_listener(a: &Rc<dyn FirstFrameListener>, b: &Rc<dyn FirstFrameListener>) -> bool {
    ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl FirstFrameNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `listener` to the set. Registering the same listener (by
    /// identity) twice is a no-op.
    pub fn register(&self, listener: Rc<dyn FirstFrameListener>) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.iter().any(|l| same_listener(l, &listener)) {
            listeners.push(listener);
        }
    }

    /// Removes `listener` (by identity) from the set. Removing a listener
    /// that was never registered is a no-op.
    pub fn unregister(&self, listener: &Rc<dyn FirstFrameListener>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !same_listener(l, listener));
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// True if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Invokes every currently-registered listener and returns how many were
    /// invoked.
    ///
    /// Iterates a snapshot of the set, so listeners may register or
    /// unregister (including themselves) during fan-out without disturbing
    /// the current notification.
    pub fn notify_first_frame(&self) -> usize {
        let snapshot: Vec<Rc<dyn FirstFrameListener>> = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener.on_first_frame();
        }
        snapshot.len()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct CountingListener {
        hits: Cell<u32>,
    }

    impl FirstFrameListener for CountingListener {
        fn on_first_frame(&self) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    #[test]
    fn notifies_each_listener_once_per_signal() {
        let notifier = FirstFrameNotifier::new();
        let a = Rc::new(CountingListener::default());
        let b = Rc::new(CountingListener::default());
        notifier.register(a.clone());
        notifier.register(b.clone());

        assert_eq!(notifier.notify_first_frame(), 2);
        assert_eq!(a.hits.get(), 1);
        assert_eq!(b.hits.get(), 1);
    }

    #[test]
    fn second_signal_reinvokes_listeners() {
        // At-least-once semantics: no internal de-duplication.
        let notifier = FirstFrameNotifier::new();
        let a = Rc::new(CountingListener::default());
        notifier.register(a.clone());

        notifier.notify_first_frame();
        notifier.notify_first_frame();
        assert_eq!(a.hits.get(), 2);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let notifier = FirstFrameNotifier::new();
        let a = Rc::new(CountingListener::default());
        notifier.register(a.clone());
        notifier.register(a.clone());

        assert_eq!(notifier.len(), 1);
        notifier.notify_first_frame();
        assert_eq!(a.hits.get(), 1);
    }

    #[test]
    fn unregister_removes_by_identity() {
        let notifier = FirstFrameNotifier::new();
        let a = Rc::new(CountingListener::default());
        let b = Rc::new(CountingListener::default());
        notifier.register(a.clone());
        notifier.register(b.clone());

        let a_dyn: Rc<dyn FirstFrameListener> = a.clone();
        notifier.unregister(&a_dyn);
        assert_eq!(notifier.len(), 1);

        notifier.notify_first_frame();
        assert_eq!(a.hits.get(), 0);
        assert_eq!(b.hits.get(), 1);
    }

    #[test]
    fn unregister_unknown_listener_is_noop() {
        let notifier = FirstFrameNotifier::new();
        let a: Rc<dyn FirstFrameListener> = Rc::new(CountingListener::default());
        notifier.unregister(&a);
        assert!(notifier.is_empty());
    }

    struct SelfRemovingListener {
        notifier: Rc<FirstFrameNotifier>,
        this: RefCell<Option<Rc<dyn FirstFrameListener>>>,
        hits: Cell<u32>,
    }

    impl FirstFrameListener for SelfRemovingListener {
        fn on_first_frame(&self) {
            self.hits.set(self.hits.get() + 1);
            if let Some(this) = self.this.borrow().as_ref() {
                self.notifier.unregister(this);
            }
        }
    }

    #[test]
    fn reentrant_unregister_does_not_disturb_fanout() {
        let notifier = Rc::new(FirstFrameNotifier::new());
        let trailing = Rc::new(CountingListener::default());

        let remover = Rc::new(SelfRemovingListener {
            notifier: notifier.clone(),
            this: RefCell::new(None),
            hits: Cell::new(0),
        });
        let remover_dyn: Rc<dyn FirstFrameListener> = remover.clone();
        *remover.this.borrow_mut() = Some(remover_dyn);

        notifier.register(remover.clone());
        notifier.register(trailing.clone());

        // The remover unregisters itself mid-fan-out; the snapshot still
        // delivers to the trailing listener.
        assert_eq!(notifier.notify_first_frame(), 2);
        assert_eq!(remover.hits.get(), 1);
        assert_eq!(trailing.hits.get(), 1);

        // Break the self-reference cycle.
        *remover.this.borrow_mut() = None;

        // Gone for the next signal.
        notifier.notify_first_frame();
        assert_eq!(remover.hits.get(), 1);
        assert_eq!(trailing.hits.get(), 2);
    }
}
