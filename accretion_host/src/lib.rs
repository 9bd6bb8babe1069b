// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-container integration for accretion.
//!
//! `accretion_core` owns the attachment state machine; this crate supplies
//! the pieces a concrete host container wires around it:
//!
//! **[`widget`]** — [`SurfaceWidget`](widget::SurfaceWidget), the
//! surface-bearing unit that owns one attachment and one first-frame
//! notifier, and that stays fully transparent until its first frame.
//!
//! **[`flicker`]** — [`FlickerGuard`](flicker::FlickerGuard), the opaque
//! overlay a host container shows from creation until the first frame, painted
//! to match the host window's background.
//!
//! **[`config`]** — Launch-configuration resolution (entry point, initial
//! route, asset bundle path) from per-launch overrides and declarative host
//! metadata, with canonical fallbacks.
//!
//! **[`coordinator`]** — [`HostCoordinator`](coordinator::HostCoordinator),
//! which resolves the launch configuration, shows the guard, and forwards
//! host lifecycle calls to the embedded unit.
//!
//! **[`dispatch`]** — [`UiTaskQueue`](dispatch::UiTaskQueue) for re-posting
//! cross-thread completions onto the UI-affine thread before they touch any
//! attachment state.
//!
//! **[`init`]** — [`EngineInitContext`](init::EngineInitContext), the
//! explicit (singleton-free) lifecycle object for engine resource loading.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod coordinator;
pub mod dispatch;
pub mod flicker;
pub mod init;
pub mod widget;
