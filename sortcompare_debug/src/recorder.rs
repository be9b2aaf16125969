// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Counts and indices are widened to `u64` on the wire.

use sortcompare_core::config::{Algorithm, RetriggerPolicy, Side};
use sortcompare_core::time::{Duration, HostTime};
use sortcompare_core::trace::{
    CueFiredEvent, CueSkippedEvent, SessionEndEvent, SessionStartEvent, TraceRecordedEvent,
    TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_TRACE_RECORDED: u8 = 1;
const TAG_SESSION_START: u8 = 2;
const TAG_CUE_FIRED: u8 = 3;
const TAG_CUE_SKIPPED: u8 = 4;
const TAG_SESSION_END: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_side(&mut self, side: Side) {
        self.write_u8(match side {
            Side::A => 0,
            Side::B => 1,
        });
    }

    fn write_algorithm(&mut self, algorithm: Algorithm) {
        self.write_u8(match algorithm {
            Algorithm::Bubble => 0,
            Algorithm::Insertion => 1,
            Algorithm::Heap => 2,
            Algorithm::Merge => 3,
            Algorithm::Quick => 4,
        });
    }

    fn write_retrigger(&mut self, policy: RetriggerPolicy) {
        self.write_u8(match policy {
            RetriggerPolicy::Overlap => 0,
            RetriggerPolicy::Supersede => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_trace_recorded(&mut self, e: &TraceRecordedEvent) {
        self.write_u8(TAG_TRACE_RECORDED);
        self.write_algorithm(e.algorithm);
        self.write_side(e.side);
        self.write_usize(e.len);
        self.write_usize(e.steps);
        self.write_usize(e.compares);
        self.write_usize(e.commits);
    }

    fn on_session_start(&mut self, e: &SessionStartEvent) {
        self.write_u8(TAG_SESSION_START);
        self.write_side(e.side);
        self.write_algorithm(e.algorithm);
        self.write_u64(e.generation);
        self.write_u64(e.start.ticks());
        self.write_u64(e.delay.ticks());
        self.write_usize(e.cues);
        self.write_retrigger(e.retrigger);
    }

    fn on_cue_fired(&mut self, e: &CueFiredEvent) {
        self.write_u8(TAG_CUE_FIRED);
        self.write_side(e.side);
        self.write_u64(e.generation);
        self.write_usize(e.index);
        self.write_u64(e.at.ticks());
    }

    fn on_cue_skipped(&mut self, e: &CueSkippedEvent) {
        self.write_u8(TAG_CUE_SKIPPED);
        self.write_side(e.side);
        self.write_u64(e.generation);
        self.write_u64(e.current_generation);
        self.write_usize(e.index);
        self.write_u64(e.at.ticks());
    }

    fn on_session_end(&mut self, e: &SessionEndEvent) {
        self.write_u8(TAG_SESSION_END);
        self.write_side(e.side);
        self.write_u64(e.generation);
        self.write_u64(e.at.ticks());
        self.write_u8(u8::from(e.superseded));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`TraceRecordedEvent`].
    TraceRecorded(TraceRecordedEvent),
    /// A [`SessionStartEvent`].
    SessionStart(SessionStartEvent),
    /// A [`CueFiredEvent`].
    CueFired(CueFiredEvent),
    /// A [`CueSkippedEvent`].
    CueSkipped(CueSkippedEvent),
    /// A [`SessionEndEvent`].
    SessionEnd(SessionEndEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record or unknown discriminant.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_side(&mut self) -> Option<Side> {
        match self.read_u8()? {
            0 => Some(Side::A),
            1 => Some(Side::B),
            _ => None,
        }
    }

    fn read_algorithm(&mut self) -> Option<Algorithm> {
        Algorithm::ALL.get(usize::from(self.read_u8()?)).copied()
    }

    fn read_retrigger(&mut self) -> Option<RetriggerPolicy> {
        match self.read_u8()? {
            0 => Some(RetriggerPolicy::Overlap),
            1 => Some(RetriggerPolicy::Supersede),
            _ => None,
        }
    }

    fn decode_trace_recorded(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TraceRecorded(TraceRecordedEvent {
            algorithm: self.read_algorithm()?,
            side: self.read_side()?,
            len: self.read_usize()?,
            steps: self.read_usize()?,
            compares: self.read_usize()?,
            commits: self.read_usize()?,
        }))
    }

    fn decode_session_start(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::SessionStart(SessionStartEvent {
            side: self.read_side()?,
            algorithm: self.read_algorithm()?,
            generation: self.read_u64()?,
            start: HostTime(self.read_u64()?),
            delay: Duration(self.read_u64()?),
            cues: self.read_usize()?,
            retrigger: self.read_retrigger()?,
        }))
    }

    fn decode_cue_fired(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::CueFired(CueFiredEvent {
            side: self.read_side()?,
            generation: self.read_u64()?,
            index: self.read_usize()?,
            at: HostTime(self.read_u64()?),
        }))
    }

    fn decode_cue_skipped(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::CueSkipped(CueSkippedEvent {
            side: self.read_side()?,
            generation: self.read_u64()?,
            current_generation: self.read_u64()?,
            index: self.read_usize()?,
            at: HostTime(self.read_u64()?),
        }))
    }

    fn decode_session_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::SessionEnd(SessionEndEvent {
            side: self.read_side()?,
            generation: self.read_u64()?,
            at: HostTime(self.read_u64()?),
            superseded: self.read_u8()? != 0,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_TRACE_RECORDED => self.decode_trace_recorded(),
            TAG_SESSION_START => self.decode_session_start(),
            TAG_CUE_FIRED => self.decode_cue_fired(),
            TAG_CUE_SKIPPED => self.decode_cue_skipped(),
            TAG_SESSION_END => self.decode_session_end(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_start() -> SessionStartEvent {
        SessionStartEvent {
            side: Side::B,
            algorithm: Algorithm::Merge,
            generation: 2,
            start: HostTime(40_000),
            delay: Duration::from_millis(14),
            cues: 96,
            retrigger: RetriggerPolicy::Supersede,
        }
    }

    #[test]
    fn session_lifecycle_decodes_in_order() {
        let mut rec = RecorderSink::new();
        let recorded = TraceRecordedEvent {
            algorithm: Algorithm::Heap,
            side: Side::A,
            len: 12,
            steps: 60,
            compares: 30,
            commits: 30,
        };
        let fired = CueFiredEvent {
            side: Side::B,
            generation: 2,
            index: 0,
            at: HostTime(40_000),
        };
        let skipped = CueSkippedEvent {
            side: Side::B,
            generation: 1,
            current_generation: 2,
            index: 17,
            at: HostTime(41_000),
        };
        let end = SessionEndEvent {
            side: Side::B,
            generation: 2,
            at: HostTime(1_370_000),
            superseded: false,
        };
        rec.on_trace_recorded(&recorded);
        rec.on_session_start(&sample_start());
        rec.on_cue_fired(&fired);
        rec.on_cue_skipped(&skipped);
        rec.on_session_end(&end);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            vec![
                RecordedEvent::TraceRecorded(recorded),
                RecordedEvent::SessionStart(sample_start()),
                RecordedEvent::CueFired(fired),
                RecordedEvent::CueSkipped(skipped),
                RecordedEvent::SessionEnd(end),
            ]
        );
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_session_start(&sample_start());
        rec.on_session_start(&sample_start());
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 3]).collect();
        assert_eq!(events.len(), 1, "the second record is incomplete");
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        let events: Vec<_> = decode(&[0xff, 1, 2, 3]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
