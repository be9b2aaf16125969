// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Times are
//! printed in milliseconds.

use std::io::Write;

use sortcompare_core::time::{Duration, HostTime};
use sortcompare_core::trace::{
    CueFiredEvent, CueSkippedEvent, SessionEndEvent, SessionStartEvent, TraceRecordedEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    cues: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("cues", &self.cues)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, cues: true }
    }

    /// Suppresses per-cue lines, keeping session and recording events.
    #[must_use]
    pub fn without_cues(mut self) -> Self {
        self.cues = false;
        self
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    Duration(t.ticks()).as_millis_f64()
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_trace_recorded(&mut self, e: &TraceRecordedEvent) {
        let _ = writeln!(
            self.writer,
            "[record] side={} {} len={} steps={} compares={} commits={}",
            e.side, e.algorithm, e.len, e.steps, e.compares, e.commits,
        );
    }

    fn on_session_start(&mut self, e: &SessionStartEvent) {
        let _ = writeln!(
            self.writer,
            "[session:start] side={} gen={} {} at {:.3}ms delay={:.3}ms cues={} retrigger={:?}",
            e.side,
            e.generation,
            e.algorithm,
            ms(e.start),
            e.delay.as_millis_f64(),
            e.cues,
            e.retrigger,
        );
    }

    fn on_cue_fired(&mut self, e: &CueFiredEvent) {
        if !self.cues {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[cue] side={} gen={} #{} at {:.3}ms",
            e.side,
            e.generation,
            e.index,
            ms(e.at),
        );
    }

    fn on_cue_skipped(&mut self, e: &CueSkippedEvent) {
        if !self.cues {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[cue:stale] side={} gen={} (current {}) #{} at {:.3}ms",
            e.side,
            e.generation,
            e.current_generation,
            e.index,
            ms(e.at),
        );
    }

    fn on_session_end(&mut self, e: &SessionEndEvent) {
        let outcome = if e.superseded { "superseded" } else { "done" };
        let _ = writeln!(
            self.writer,
            "[session:end] side={} gen={} at {:.3}ms {outcome}",
            e.side,
            e.generation,
            ms(e.at),
        );
    }
}
