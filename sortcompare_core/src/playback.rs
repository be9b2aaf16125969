// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed replay of a [`Trace`] onto a [`RenderTarget`].
//!
//! Playback happens in two stages:
//!
//! 1. [`plan_cues`] turns a trace into a list of [`Cue`]s: one per step, each
//!    with an offset from the session start and the rendering action it
//!    performs. Step `i` sits at `i × delay` for paired traces, or
//!    `i × delay × numer / denom` for merge-shaped traces (2/3 with
//!    [`PlaybackConfig::standard`]).
//! 2. [`PlaybackSession::start`] hands every cue to a [`TimerHost`] as a
//!    deferred callback and returns immediately. Nothing is rendered until
//!    the host runs the callbacks.
//!
//! Each side owns its render target and a [`SessionEpoch`]. Sessions on
//! different sides never share state. Sessions on the *same* side interact
//! only through the epoch, according to the [`RetriggerPolicy`] of the newer
//! session.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::config::{ConfigError, PlaybackConfig, RetriggerPolicy, SessionConfig};
use crate::render::RenderTarget;
use crate::steps::{HeightUpdate, Step, Trace, TraceShape};
use crate::time::{Duration, HostTime};
use crate::timer::TimerHost;
use crate::trace::{
    CueFiredEvent, CueSkippedEvent, SessionEndEvent, SessionStartEvent, SharedTracer,
};

/// The rendering effect of one cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CueAction<T> {
    /// Highlight both positions.
    Highlight(usize, usize),
    /// Return both positions to their default state.
    Release(usize, usize),
    /// Set heights, optionally returning the touched bars to default.
    Apply {
        /// The first (always present) update.
        first: HeightUpdate<T>,
        /// The second update, for two-bar commits.
        second: Option<HeightUpdate<T>>,
        /// Whether each updated bar also returns to its default state.
        release: bool,
    },
}

impl<T: Copy> CueAction<T> {
    /// Performs the action on `target`.
    pub fn apply<R: RenderTarget<T> + ?Sized>(&self, target: &mut R) {
        match *self {
            Self::Highlight(a, b) => {
                target.set_highlight(a);
                target.set_highlight(b);
            }
            Self::Release(a, b) => {
                target.set_default(a);
                target.set_default(b);
            }
            Self::Apply {
                first,
                second,
                release,
            } => {
                for update in core::iter::once(first).chain(second) {
                    target.set_height(update.pos, update.height);
                    if release {
                        target.set_default(update.pos);
                    }
                }
            }
        }
    }
}

/// A scheduled step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cue<T> {
    /// Step index within the trace.
    pub index: usize,
    /// Offset from the session start.
    pub at: Duration,
    /// What the cue does when it fires.
    pub action: CueAction<T>,
}

/// Returns the offset of step `index` from the session start.
///
/// # Panics
///
/// Panics if `config` has a zero merge denominator and `shape` is
/// [`TraceShape::Merge`]. [`plan_cues`] validates first.
#[must_use]
pub fn cue_offset(
    shape: TraceShape,
    delay: Duration,
    index: usize,
    config: &PlaybackConfig,
) -> Duration {
    let index = index as u64;
    match shape {
        TraceShape::Paired => delay.scaled(index, 1, 1),
        TraceShape::Merge => {
            delay.scaled(index, config.merge_delay_numer, config.merge_delay_denom)
        }
    }
}

/// Plans one cue per step of `trace`.
///
/// Offsets are nondecreasing in step index. For merge-shaped traces a compare
/// that immediately follows another compare releases the highlight the first
/// one set, and commits leave highlight state alone.
pub fn plan_cues<T: Copy>(
    trace: &Trace<T>,
    delay: Duration,
    config: &PlaybackConfig,
) -> Result<Vec<Cue<T>>, ConfigError> {
    let config = config.validate()?;
    let shape = trace.shape();
    let mut cues = Vec::with_capacity(trace.len());
    let mut highlighted = false;
    for (index, step) in trace.steps().iter().enumerate() {
        let action = match (*step, shape) {
            (Step::Compare(a, b), TraceShape::Paired) => CueAction::Highlight(a, b),
            (Step::Compare(a, b), TraceShape::Merge) => {
                highlighted = !highlighted;
                if highlighted {
                    CueAction::Highlight(a, b)
                } else {
                    CueAction::Release(a, b)
                }
            }
            (Step::Commit { first, second }, _) => {
                highlighted = false;
                CueAction::Apply {
                    first,
                    second,
                    release: shape == TraceShape::Paired,
                }
            }
        };
        cues.push(Cue {
            index,
            at: cue_offset(shape, delay, index, &config),
            action,
        });
    }
    Ok(cues)
}

#[derive(Debug, Default)]
struct EpochState {
    latest: Cell<u64>,
    cutoff: Cell<u64>,
}

/// Per-side session counter shared between a side and its pending cues.
///
/// Every session start takes the next generation. A session started with
/// [`RetriggerPolicy::Supersede`] also marks every earlier generation as
/// superseded; cues from a superseded generation skip their effect when they
/// fire. [`RetriggerPolicy::Overlap`] sessions leave earlier ones running.
#[derive(Clone, Debug, Default)]
pub struct SessionEpoch(Rc<EpochState>);

impl SessionEpoch {
    /// Creates an epoch at generation zero. The first session is generation 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently started generation.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.latest.get()
    }

    /// Starts a new generation under `policy` and returns it.
    pub fn begin(&self, policy: RetriggerPolicy) -> u64 {
        let generation = self.0.latest.get() + 1;
        self.0.latest.set(generation);
        if policy == RetriggerPolicy::Supersede {
            self.0.cutoff.set(generation);
        }
        generation
    }

    /// Returns `true` if cues of `generation` should no longer render.
    #[must_use]
    pub fn is_superseded(&self, generation: u64) -> bool {
        generation < self.0.cutoff.get()
    }
}

/// What [`PlaybackSession::start`] scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionSummary {
    /// Generation the session runs under.
    pub generation: u64,
    /// Host time the cue offsets are measured from.
    pub start: HostTime,
    /// Number of cues scheduled.
    pub cues: usize,
    /// Offset of the final cue.
    pub duration: Duration,
}

/// Entry point for replaying traces.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackSession;

impl PlaybackSession {
    /// Schedules every step of `trace` on `host` and returns without
    /// rendering anything.
    ///
    /// Each cue, when run by the host, applies its [`CueAction`] to `target`
    /// unless a newer [`Supersede`](RetriggerPolicy::Supersede) session has
    /// started on `epoch`, in which case it reports a skip instead. The final
    /// cue also reports the end of the session. An empty trace schedules
    /// nothing and reports start and end immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDenominator`] if `playback` is invalid.
    pub fn start<T, R, H>(
        trace: &Trace<T>,
        config: &SessionConfig,
        playback: &PlaybackConfig,
        target: &Rc<RefCell<R>>,
        host: &mut H,
        epoch: &SessionEpoch,
        tracer: &SharedTracer,
    ) -> Result<SessionSummary, ConfigError>
    where
        T: Copy + 'static,
        R: RenderTarget<T> + ?Sized + 'static,
        H: TimerHost + ?Sized,
    {
        let cues = plan_cues(trace, config.delay, playback)?;
        let generation = epoch.begin(config.retrigger);
        let start = host.now();
        let side = config.side;
        let duration = cues.last().map_or(Duration::ZERO, |c| c.at);

        tracer.session_start(&SessionStartEvent {
            side,
            algorithm: config.algorithm,
            generation,
            start,
            delay: config.delay,
            cues: cues.len(),
            retrigger: config.retrigger,
        });

        if cues.is_empty() {
            tracer.session_end(&SessionEndEvent {
                side,
                generation,
                at: start,
                superseded: false,
            });
        }

        let last = cues.len().saturating_sub(1);
        let count = cues.len();
        for cue in cues {
            let target = Rc::clone(target);
            let epoch = epoch.clone();
            let tracer = tracer.clone();
            let at = start.saturating_add(cue.at);
            let callback = move || {
                let superseded = epoch.is_superseded(generation);
                if superseded {
                    tracer.cue_skipped(&CueSkippedEvent {
                        side,
                        generation,
                        current_generation: epoch.current(),
                        index: cue.index,
                        at,
                    });
                } else {
                    cue.action.apply(&mut *target.borrow_mut());
                    tracer.cue_fired(&CueFiredEvent {
                        side,
                        generation,
                        index: cue.index,
                        at,
                    });
                }
                if cue.index == last {
                    tracer.session_end(&SessionEndEvent {
                        side,
                        generation,
                        at,
                        superseded,
                    });
                }
            };
            host.set_timeout(cue.at, Box::new(callback));
        }

        Ok(SessionSummary {
            generation,
            start,
            cues: count,
            duration,
        })
    }
}
