// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! attachment event to a [`Write`](std::io::Write) destination (default:
//! stderr).

use std::io::Write;

use accretion_core::trace::{AttachEvent, DetachEvent, ResizeEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = writeln!(
            self.writer,
            "[attach] displaced_previous={} connected_immediately={}",
            e.displaced_previous, e.connected_immediately
        );
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        let _ = writeln!(self.writer, "[detach] was_connected={}", e.was_connected);
    }

    fn on_redundant_detach(&mut self) {
        let _ = writeln!(self.writer, "[warn] detach with no renderer attached");
    }

    fn on_surface_available(&mut self) {
        let _ = writeln!(self.writer, "[surface] available");
    }

    fn on_surface_unavailable(&mut self) {
        let _ = writeln!(self.writer, "[surface] unavailable");
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        let _ = writeln!(
            self.writer,
            "[resize] {}x{} {}",
            e.size.width,
            e.size.height,
            if e.forwarded { "forwarded" } else { "dropped" }
        );
    }

    fn on_connect(&mut self) {
        let _ = writeln!(self.writer, "[connect] surface handed to renderer");
    }

    fn on_disconnect(&mut self) {
        let _ = writeln!(self.writer, "[disconnect] surface taken from renderer");
    }

    fn on_first_frame(&mut self, listener_count: usize) {
        let _ = writeln!(self.writer, "[first-frame] listeners={listener_count}");
    }
}
