// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics sinks for attachment traces.
//!
//! `accretion_core` emits attachment lifecycle events through its
//! [`TraceSink`](accretion_core::trace::TraceSink) trait; this crate
//! provides the `std`-side consumers:
//!
//! **[`pretty`]** — One human-readable line per event, to stderr or any
//! writer. Drop-in diagnostic while bringing up a new host integration.
//!
//! **[`chrome`]** — Timestamped capture plus Chrome Trace Event Format
//! export, for timeline inspection of attach → first-frame latency in
//! `chrome://tracing` or Perfetto.

pub mod chrome;
pub mod pretty;
