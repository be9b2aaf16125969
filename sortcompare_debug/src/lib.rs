// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for sortcompare
//! diagnostics.
//!
//! This crate provides [`TraceSink`](sortcompare_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`] — writes Chrome Trace Event Format JSON from
//!   recorded bytes.
//! - [`Fanout`] — forwards every event to several shared sinks.

pub mod chrome;
pub mod pretty;
pub mod recorder;

use sortcompare_core::trace::{
    CueFiredEvent, CueSkippedEvent, SessionEndEvent, SessionStartEvent, SharedSink,
    TraceRecordedEvent, TraceSink,
};

/// A [`TraceSink`] that forwards each event to every registered sink.
///
/// Sinks that are already borrowed when an event arrives miss that event.
#[derive(Default)]
pub struct Fanout {
    sinks: Vec<SharedSink>,
}

impl std::fmt::Debug for Fanout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fanout")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Fanout {
    /// Creates a fan-out with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink.
    #[must_use]
    pub fn with(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    fn each(&self, mut f: impl FnMut(&mut dyn TraceSink)) {
        for sink in &self.sinks {
            if let Ok(mut sink) = sink.try_borrow_mut() {
                f(&mut *sink);
            }
        }
    }
}

impl TraceSink for Fanout {
    fn on_trace_recorded(&mut self, e: &TraceRecordedEvent) {
        self.each(|s| s.on_trace_recorded(e));
    }

    fn on_session_start(&mut self, e: &SessionStartEvent) {
        self.each(|s| s.on_session_start(e));
    }

    fn on_cue_fired(&mut self, e: &CueFiredEvent) {
        self.each(|s| s.on_cue_fired(e));
    }

    fn on_cue_skipped(&mut self, e: &CueSkippedEvent) {
        self.each(|s| s.on_cue_skipped(e));
    }

    fn on_session_end(&mut self, e: &SessionEndEvent) {
        self.each(|s| s.on_session_end(e));
    }
}
