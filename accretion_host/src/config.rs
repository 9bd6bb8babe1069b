// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Launch-configuration resolution.
//!
//! A host container launches the embedded unit with three pieces of
//! configuration: the entry-point name, the initial route, and the asset
//! bundle path. Each resolves in priority order:
//!
//! 1. an explicit per-launch override (the launching intent's extras),
//! 2. a static declarative default associated with the host container type
//!    (manifest metadata),
//! 3. the canonical defaults [`DEFAULT_ENTRYPOINT`] and
//!    [`DEFAULT_INITIAL_ROUTE`]; the bundle path has no canonical default
//!    and is left for the initialization pipeline to locate.

/// Entry point used when neither an override nor declared metadata names one.
pub const DEFAULT_ENTRYPOINT: &str = "main";

/// Initial route used when neither an override nor declared metadata names
/// one.
pub const DEFAULT_INITIAL_ROUTE: &str = "/";

/// Explicit per-launch overrides, all optional.
///
/// The bundle-path override covers the tooling launch path, where the
/// launcher passes the bundle location directly alongside the launch request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchOverrides {
    /// Overrides the entry-point name.
    pub entrypoint: Option<String>,
    /// Overrides the initial route.
    pub initial_route: Option<String>,
    /// Overrides the asset bundle path.
    pub bundle_path: Option<String>,
}

/// Static declarative defaults carried by the host container type.
///
/// The indirection exists because the host container may be the very first
/// unit launched in the process, before any code of the embedder's owner has
/// run; declarative metadata is the only configuration channel available
/// that early.
pub trait DeclaredDefaults {
    /// Declared entry-point name, if any.
    fn declared_entrypoint(&self) -> Option<String> {
        None
    }

    /// Declared initial route, if any.
    fn declared_initial_route(&self) -> Option<String> {
        None
    }

    /// Declared bundle path, if any.
    fn declared_bundle_path(&self) -> Option<String> {
        None
    }
}

/// Declared defaults for hosts that declare nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDeclaredDefaults;

impl DeclaredDefaults for NoDeclaredDefaults {}

/// Fully resolved launch configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Entry-point name to execute once the engine is ready.
    pub entrypoint: String,
    /// Route the embedded unit renders first.
    pub initial_route: String,
    /// Asset bundle path, or `None` when the initialization pipeline should
    /// locate it.
    pub bundle_path: Option<String>,
}

impl LaunchConfig {
    /// Resolves a configuration from `overrides` and `declared`, falling
    /// back to the canonical defaults.
    #[must_use]
    pub fn resolve(overrides: &LaunchOverrides, declared: &impl DeclaredDefaults) -> Self {
        Self {
            entrypoint: overrides
                .entrypoint
                .clone()
                .or_else(|| declared.declared_entrypoint())
                .unwrap_or_else(|| DEFAULT_ENTRYPOINT.into()),
            initial_route: overrides
                .initial_route
                .clone()
                .or_else(|| declared.declared_initial_route())
                .unwrap_or_else(|| DEFAULT_INITIAL_ROUTE.into()),
            bundle_path: overrides
                .bundle_path
                .clone()
                .or_else(|| declared.declared_bundle_path()),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::resolve(&LaunchOverrides::default(), &NoDeclaredDefaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Declared;

    impl DeclaredDefaults for Declared {
        fn declared_entrypoint(&self) -> Option<String> {
            Some("declaredMain".into())
        }

        fn declared_initial_route(&self) -> Option<String> {
            Some("/declared".into())
        }
    }

    #[test]
    fn canonical_defaults_apply_when_nothing_is_specified() {
        let config = LaunchConfig::default();
        assert_eq!(config.entrypoint, "main");
        assert_eq!(config.initial_route, "/");
        assert_eq!(config.bundle_path, None);
    }

    #[test]
    fn declared_defaults_beat_canonical_defaults() {
        let config = LaunchConfig::resolve(&LaunchOverrides::default(), &Declared);
        assert_eq!(config.entrypoint, "declaredMain");
        assert_eq!(config.initial_route, "/declared");
    }

    #[test]
    fn overrides_beat_declared_defaults() {
        let overrides = LaunchOverrides {
            entrypoint: Some("customMain".into()),
            initial_route: None,
            bundle_path: Some("/data/bundle".into()),
        };
        let config = LaunchConfig::resolve(&overrides, &Declared);
        assert_eq!(config.entrypoint, "customMain");
        assert_eq!(config.initial_route, "/declared", "unset fields resolve independently");
        assert_eq!(config.bundle_path.as_deref(), Some("/data/bundle"));
    }
}
