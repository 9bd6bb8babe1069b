// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-surface attachment state machine and first-frame signaling.
//!
//! `accretion_core` coordinates two independently-evolving lifecycles: a
//! platform-owned drawable surface (created, resized, and destroyed on the
//! windowing system's schedule) and a renderer that must be told exactly when
//! a usable surface exists. It is `no_std` compatible (with `alloc`) and
//! performs no locking; see the concurrency notes on
//! [`attachment::RenderSurfaceAttachment`].
//!
//! # Architecture
//!
//! Platform surface events flow through the attachment and out to the
//! renderer; the renderer's first-frame signal flows back out through the
//! notifier:
//!
//! ```text
//!   Platform (surface events)
//!       │
//!       ▼
//!   SurfaceLifecycle ──► RenderSurfaceAttachment ──► Renderer calls
//!                                                        │
//!                   ┌────────────────────────────────────┘
//!                   ▼
//!   first frame ──► FirstFrameNotifier ──► listeners (overlay, opacity, host)
//! ```
//!
//! **[`renderer`]** — The [`Renderer`](renderer::Renderer) capability trait
//! that platform renderers implement. The core only ever calls it; it never
//! implements it.
//!
//! **[`surface`]** — [`SurfaceSize`](surface::SurfaceSize) and the
//! [`SurfaceLifecycle`](surface::SurfaceLifecycle) handler capability that
//! platform glue drives with surface events.
//!
//! **[`attachment`]** — The per-widget state machine that guarantees the
//! renderer only ever observes a well-formed create → [resize]* → destroy
//! sequence, for every interleaving of owner attach/detach calls and
//! platform surface events.
//!
//! **[`notifier`]** — Fan-out registry invoked when the renderer reports its
//! first rendered frame, used to drive flicker suppression.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! attachment diagnostics, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Reserved for std-only conveniences in
//!   downstream crates; the core itself stays `no_std`.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod attachment;
pub mod notifier;
pub mod renderer;
pub mod surface;
pub mod trace;
