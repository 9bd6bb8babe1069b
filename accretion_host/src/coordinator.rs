// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-container boundary.
//!
//! A [`HostCoordinator`] sits between a platform host container (an
//! activity, a window controller) and the embedded unit that actually hosts
//! the surface widget. On creation it resolves the launch configuration,
//! shows the flicker guard, and forwards `on_create`; afterwards it forwards
//! lifecycle calls verbatim. The guard is hidden by the first-frame listener
//! the coordinator hands out, which the owner registers on the surface
//! widget.

use std::cell::RefCell;
use std::rc::Rc;

use accretion_core::notifier::FirstFrameListener;

use crate::config::{DeclaredDefaults, LaunchConfig, LaunchOverrides};
use crate::flicker::{BackdropSource, FlickerGuard, HideOnFirstFrame};

/// The embedded unit a host container drives.
///
/// Lifecycle calls arrive in the usual order: `on_create` once, then any
/// number of `on_resume`/`on_pause` pairs, then `on_destroy` once.
/// `on_new_launch` may arrive at any time between create and destroy when
/// the host is re-launched with fresh overrides.
pub trait EmbeddedUnit {
    /// The host container was created; `config` is fully resolved.
    fn on_create(&mut self, config: &LaunchConfig);

    /// The host container became interactive.
    fn on_resume(&mut self);

    /// The host container lost the foreground.
    fn on_pause(&mut self);

    /// The host container is going away for good.
    fn on_destroy(&mut self);

    /// The running host was re-launched with new per-launch overrides.
    fn on_new_launch(&mut self, overrides: &LaunchOverrides) {
        _ = overrides;
    }
}

/// Forwards host lifecycle calls to an [`EmbeddedUnit`] and owns the
/// container's [`FlickerGuard`].
pub struct HostCoordinator<U: EmbeddedUnit, B> {
    unit: U,
    guard: Rc<RefCell<FlickerGuard<B>>>,
    config: LaunchConfig,
}

impl<U: EmbeddedUnit, B> core::fmt::Debug for HostCoordinator<U, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HostCoordinator")
            .field("config", &self.config)
            .field("guard_visible", &self.guard.borrow().is_visible())
            .finish_non_exhaustive()
    }
}

impl<U: EmbeddedUnit, B> HostCoordinator<U, B> {
    /// Creates the coordinator: resolves configuration, shows the guard
    /// (painted with the resolved backdrop, or unpainted), and forwards
    /// `on_create` to `unit`.
    pub fn create<S>(
        mut unit: U,
        overrides: &LaunchOverrides,
        declared: &impl DeclaredDefaults,
        backdrop: &S,
    ) -> Self
    where
        S: BackdropSource<Backdrop = B>,
    {
        let config = LaunchConfig::resolve(overrides, declared);
        let guard = Rc::new(RefCell::new(FlickerGuard::resolve_from(backdrop)));
        unit.on_create(&config);
        Self {
            unit,
            guard,
            config,
        }
    }

    /// The resolved launch configuration.
    #[must_use]
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// True while the flicker guard still covers the container.
    #[must_use]
    pub fn is_guard_visible(&self) -> bool {
        self.guard.borrow().is_visible()
    }

    /// Shared access to the embedded unit.
    #[must_use]
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Exclusive access to the embedded unit.
    pub fn unit_mut(&mut self) -> &mut U {
        &mut self.unit
    }

    /// The listener that hides this container's guard on the first frame.
    /// Register it on the surface widget.
    #[must_use]
    pub fn first_frame_listener(&self) -> Rc<dyn FirstFrameListener>
    where
        B: 'static,
    {
        Rc::new(HideOnFirstFrame::new(self.guard.clone()))
    }

    /// Forwards `on_resume`.
    pub fn resume(&mut self) {
        self.unit.on_resume();
    }

    /// Forwards `on_pause`.
    pub fn pause(&mut self) {
        self.unit.on_pause();
    }

    /// Forwards `on_destroy`.
    pub fn destroy(&mut self) {
        self.unit.on_destroy();
    }

    /// Forwards a re-launch with fresh overrides.
    pub fn new_launch(&mut self, overrides: &LaunchOverrides) {
        self.unit.on_new_launch(overrides);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::NoDeclaredDefaults;
    use crate::flicker::BackdropSource;

    use super::*;

    #[derive(Default)]
    struct LoggingUnit {
        events: Vec<String>,
    }

    impl EmbeddedUnit for LoggingUnit {
        fn on_create(&mut self, config: &LaunchConfig) {
            self.events
                .push(format!("create:{}:{}", config.entrypoint, config.initial_route));
        }

        fn on_resume(&mut self) {
            self.events.push("resume".into());
        }

        fn on_pause(&mut self) {
            self.events.push("pause".into());
        }

        fn on_destroy(&mut self) {
            self.events.push("destroy".into());
        }

        fn on_new_launch(&mut self, overrides: &LaunchOverrides) {
            self.events
                .push(format!("new_launch:{:?}", overrides.initial_route));
        }
    }

    struct NoBackdrop;

    impl BackdropSource for NoBackdrop {
        type Backdrop = u32;

        fn window_background(&self) -> Option<u32> {
            None
        }
    }

    #[test]
    fn create_resolves_config_and_forwards_lifecycle() {
        let mut coordinator = HostCoordinator::create(
            LoggingUnit::default(),
            &LaunchOverrides::default(),
            &NoDeclaredDefaults,
            &NoBackdrop,
        );
        assert!(coordinator.is_guard_visible());
        assert_eq!(coordinator.config().entrypoint, "main");

        coordinator.resume();
        coordinator.pause();
        coordinator.new_launch(&LaunchOverrides {
            initial_route: Some("/deep".into()),
            ..LaunchOverrides::default()
        });
        coordinator.destroy();

        assert_eq!(
            coordinator.unit().events,
            vec![
                "create:main:/",
                "resume",
                "pause",
                "new_launch:Some(\"/deep\")",
                "destroy"
            ]
        );
    }

    #[test]
    fn first_frame_listener_hides_guard() {
        let coordinator = HostCoordinator::create(
            LoggingUnit::default(),
            &LaunchOverrides::default(),
            &NoDeclaredDefaults,
            &NoBackdrop,
        );
        let listener = coordinator.first_frame_listener();

        assert!(coordinator.is_guard_visible());
        listener.on_first_frame();
        assert!(!coordinator.is_guard_visible());

        // A duplicate first-frame report changes nothing.
        listener.on_first_frame();
        assert!(!coordinator.is_guard_visible());
    }
}
