// Copyright 2026 the Accretion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`TimelineSink`] implements [`TraceSink`], timestamping each attachment
//! event on receipt. [`TimelineSink::export`] writes [Chrome Trace Event
//! Format][spec] JSON suitable for `chrome://tracing` or
//! [Perfetto](https://ui.perfetto.dev/), which makes the attach →
//! first-frame latency directly visible on a timeline.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};
use std::time::Instant;

use serde_json::{Value, json};

use accretion_core::trace::{AttachEvent, DetachEvent, ResizeEvent, TraceSink};

/// One timestamped attachment event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineRecord {
    /// Microseconds since the sink was created.
    pub ts_us: u64,
    /// What happened.
    pub event: TimelineEvent,
}

/// Recorded attachment event, with the fields the timeline cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Renderer installed.
    Attach(AttachEvent),
    /// Renderer removed.
    Detach(DetachEvent),
    /// Redundant detach diagnostic.
    RedundantDetach,
    /// Platform surface appeared.
    SurfaceAvailable,
    /// Platform surface disappeared.
    SurfaceUnavailable,
    /// Resize observed.
    Resize(ResizeEvent),
    /// `surface_created` forwarded.
    Connect,
    /// `surface_destroyed` forwarded.
    Disconnect,
    /// First-frame fan-out to this many listeners.
    FirstFrame(usize),
}

/// A [`TraceSink`] that records timestamped events for timeline export.
#[derive(Debug)]
pub struct TimelineSink {
    start: Instant,
    records: Vec<TimelineRecord>,
}

impl Default for TimelineSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineSink {
    /// Creates an empty sink; timestamps are relative to this moment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            records: Vec::new(),
        }
    }

    /// The recorded events, in arrival order.
    #[must_use]
    pub fn records(&self) -> &[TimelineRecord] {
        &self.records
    }

    fn record(&mut self, event: TimelineEvent) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a trace session does not span 580k years"
        )]
        let ts_us = self.start.elapsed().as_micros() as u64;
        self.records.push(TimelineRecord { ts_us, event });
    }

    /// Exports the recording as a Chrome Trace Event Format JSON array.
    pub fn export(&self, writer: &mut dyn Write) -> io::Result<()> {
        let events: Vec<Value> = self.records.iter().map(to_chrome_event).collect();
        serde_json::to_writer_pretty(writer, &events)?;
        Ok(())
    }
}

fn to_chrome_event(record: &TimelineRecord) -> Value {
    let (name, args) = match &record.event {
        TimelineEvent::Attach(e) => (
            "Attach",
            json!({
                "displaced_previous": e.displaced_previous,
                "connected_immediately": e.connected_immediately,
            }),
        ),
        TimelineEvent::Detach(e) => ("Detach", json!({ "was_connected": e.was_connected })),
        TimelineEvent::RedundantDetach => ("RedundantDetach", json!({})),
        TimelineEvent::SurfaceAvailable => ("SurfaceAvailable", json!({})),
        TimelineEvent::SurfaceUnavailable => ("SurfaceUnavailable", json!({})),
        TimelineEvent::Resize(e) => (
            "Resize",
            json!({
                "width": e.size.width,
                "height": e.size.height,
                "forwarded": e.forwarded,
            }),
        ),
        TimelineEvent::Connect => ("Connect", json!({})),
        TimelineEvent::Disconnect => ("Disconnect", json!({})),
        TimelineEvent::FirstFrame(listeners) => {
            ("FirstFrame", json!({ "listeners": listeners }))
        }
    };
    json!({
        "ph": "i",
        "name": name,
        "cat": "Attachment",
        "ts": record.ts_us,
        "pid": 0,
        "tid": 0,
        "s": "t",
        "args": args,
    })
}

impl TraceSink for TimelineSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.record(TimelineEvent::Attach(*e));
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        self.record(TimelineEvent::Detach(*e));
    }

    fn on_redundant_detach(&mut self) {
        self.record(TimelineEvent::RedundantDetach);
    }

    fn on_surface_available(&mut self) {
        self.record(TimelineEvent::SurfaceAvailable);
    }

    fn on_surface_unavailable(&mut self) {
        self.record(TimelineEvent::SurfaceUnavailable);
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.record(TimelineEvent::Resize(*e));
    }

    fn on_connect(&mut self) {
        self.record(TimelineEvent::Connect);
    }

    fn on_disconnect(&mut self) {
        self.record(TimelineEvent::Disconnect);
    }

    fn on_first_frame(&mut self, listener_count: usize) {
        self.record(TimelineEvent::FirstFrame(listener_count));
    }
}
