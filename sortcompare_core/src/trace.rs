// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for recording and playback.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! recorder and the playback scheduler call as they work. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! Two wrappers dispatch to a sink:
//!
//! - [`Tracer`] borrows a `&mut dyn TraceSink` for synchronous work
//!   (recording a trace, starting a session).
//! - [`SharedTracer`] holds an `Rc<RefCell<dyn TraceSink>>` so deferred
//!   playback callbacks can report when they fire.
//!
//! When the `trace` feature is **off**, every wrapper method compiles to
//! nothing. When **on**, each performs a single `Option` branch before
//! dispatching.
//!
//! (Not to be confused with [`steps::Trace`](crate::steps::Trace), the step
//! record being replayed.)

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::config::{Algorithm, RetriggerPolicy, Side};
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a sort has been recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecordedEvent {
    /// Algorithm that was recorded.
    pub algorithm: Algorithm,
    /// Side the trace is destined for.
    pub side: Side,
    /// Number of input values.
    pub len: usize,
    /// Total steps.
    pub steps: usize,
    /// Compare steps.
    pub compares: usize,
    /// Commit steps.
    pub commits: usize,
}

/// Emitted when a playback session has scheduled all of its cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStartEvent {
    /// Side being animated.
    pub side: Side,
    /// Algorithm whose trace is replayed.
    pub algorithm: Algorithm,
    /// Session epoch on this side.
    pub generation: u64,
    /// Host time the cue offsets are measured from.
    pub start: HostTime,
    /// Per-step delay before any shape factor.
    pub delay: Duration,
    /// Number of cues scheduled.
    pub cues: usize,
    /// Re-trigger policy in force.
    pub retrigger: RetriggerPolicy,
}

/// Emitted when a cue applies its rendering effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CueFiredEvent {
    /// Side being animated.
    pub side: Side,
    /// Session epoch the cue belongs to.
    pub generation: u64,
    /// Step index within the trace.
    pub index: usize,
    /// Scheduled host time of the cue.
    pub at: HostTime,
}

/// Emitted when a cue from a superseded session wakes up and does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CueSkippedEvent {
    /// Side the cue targeted.
    pub side: Side,
    /// Session epoch the cue belongs to.
    pub generation: u64,
    /// Epoch that superseded it.
    pub current_generation: u64,
    /// Step index within the trace.
    pub index: usize,
    /// Scheduled host time of the cue.
    pub at: HostTime,
}

/// Emitted when a session's last cue has woken up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionEndEvent {
    /// Side that was animated.
    pub side: Side,
    /// Session epoch.
    pub generation: u64,
    /// Scheduled host time of the final cue.
    pub at: HostTime,
    /// Whether a newer session had taken over before the end.
    pub superseded: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostic events from recording and playback.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a trace has been recorded.
    fn on_trace_recorded(&mut self, e: &TraceRecordedEvent) {
        _ = e;
    }

    /// Called once a session has scheduled its cues.
    fn on_session_start(&mut self, e: &SessionStartEvent) {
        _ = e;
    }

    /// Called when a cue applies its effect.
    fn on_cue_fired(&mut self, e: &CueFiredEvent) {
        _ = e;
    }

    /// Called when a stale cue skips its effect.
    fn on_cue_skipped(&mut self, e: &CueSkippedEvent) {
        _ = e;
    }

    /// Called when a session's final cue has woken up.
    fn on_session_end(&mut self, e: &SessionEndEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional borrowed [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TraceRecordedEvent`].
    #[inline]
    pub fn trace_recorded(&mut self, e: &TraceRecordedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_trace_recorded(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// SharedTracer wrapper
// ---------------------------------------------------------------------------

/// A shared sink handle, as held by [`SharedTracer`].
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Cloneable wrapper around an optional shared [`TraceSink`].
///
/// Deferred callbacks outlive any borrow taken when they were scheduled, so
/// each one carries a clone of this handle instead of a [`Tracer`]. The sink
/// is borrowed only for the duration of a single event; a sink that is
/// already borrowed when an event arrives drops that event.
#[derive(Clone, Default)]
pub struct SharedTracer {
    #[cfg(feature = "trace")]
    sink: Option<SharedSink>,
}

impl core::fmt::Debug for SharedTracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedTracer").finish_non_exhaustive()
    }
}

impl SharedTracer {
    /// Creates a tracer that dispatches to the given shared sink.
    #[inline]
    #[must_use]
    pub fn new(sink: SharedSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[cfg(feature = "trace")]
    #[inline]
    fn with(&self, f: impl FnOnce(&mut dyn TraceSink)) {
        if let Some(sink) = &self.sink
            && let Ok(mut sink) = sink.try_borrow_mut()
        {
            f(&mut *sink);
        }
    }

    /// Emits a [`SessionStartEvent`].
    #[inline]
    pub fn session_start(&self, e: &SessionStartEvent) {
        #[cfg(feature = "trace")]
        self.with(|s| s.on_session_start(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CueFiredEvent`].
    #[inline]
    pub fn cue_fired(&self, e: &CueFiredEvent) {
        #[cfg(feature = "trace")]
        self.with(|s| s.on_cue_fired(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CueSkippedEvent`].
    #[inline]
    pub fn cue_skipped(&self, e: &CueSkippedEvent) {
        #[cfg(feature = "trace")]
        self.with(|s| s.on_cue_skipped(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SessionEndEvent`].
    #[inline]
    pub fn session_end(&self, e: &SessionEndEvent) {
        #[cfg(feature = "trace")]
        self.with(|s| s.on_session_end(e));
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
