// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumented sorting traces and timed playback for side-by-side sort
//! animation.
//!
//! `sortcompare_core` records what a comparison sort does, step by step, and
//! replays that record against a rendering target on a timer. Two sides run
//! the same input through different algorithms so their progress can be
//! watched and compared. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   ArrayGenerator::generate() ──► SeededPair (identical arrays)
//!       │
//!       ▼  per side
//!   record(algorithm, values) ──► Trace { shape, steps }
//!       │
//!       ▼
//!   plan_cues(trace, delay) ──► Cue { index, at, action }
//!       │
//!       ▼
//!   PlaybackSession::start() ──► TimerHost::set_timeout() per cue
//!                                      │
//!                                      ▼  later
//!                               RenderTarget::set_highlight / set_default / set_height
//! ```
//!
//! **[`record`]** — The five instrumented algorithms (bubble, insertion,
//! heap, merge, quick). Recording is synchronous and deterministic.
//!
//! **[`steps`]** — [`Step`](steps::Step) and [`Trace`](steps::Trace), the
//! flat replayable record, with [`replay`](steps::Trace::replay) for
//! checking that a trace sorts its input.
//!
//! **[`playback`]** — Cue planning and session scheduling, including the
//! per-side [`SessionEpoch`](playback::SessionEpoch) used to supersede stale
//! sessions.
//!
//! **[`timer`]** — The [`TimerHost`](timer::TimerHost) trait and the
//! deterministic [`VirtualTimers`](timer::VirtualTimers) queue.
//!
//! **[`render`]** — The [`RenderTarget`](render::RenderTarget) trait that
//! backends implement, and the in-memory [`Bars`](render::Bars) target.
//!
//! **[`config`]** — Algorithms, sides, speed settings and pacing presets.
//!
//! **[`generate`]** — Random input arrays.
//!
//! **[`stats`]** — Step counts, playback length and which side wins.
//!
//! **[`time`]** — Microsecond [`HostTime`](time::HostTime) and
//! [`Duration`](time::Duration).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! recording and playback instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrappers.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables tracer method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod generate;
pub mod playback;
pub mod record;
pub mod render;
pub mod stats;
pub mod steps;
pub mod time;
pub mod timer;
pub mod trace;
