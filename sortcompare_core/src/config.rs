// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-session configuration.
//!
//! Each side of a comparison is driven by an explicit [`SessionConfig`]:
//! which [`Algorithm`] to record, how long to wait between steps, which
//! [`Side`] it renders to, and how a re-trigger treats callbacks still pending
//! from an earlier run. Nothing is looked up from ambient state.
//!
//! [`PlaybackConfig`] carries the global pacing constants and offers presets
//! in the same spirit as a platform default.

use core::fmt;
use core::str::FromStr;

use crate::time::Duration;

/// One of the five instrumented sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Bubble sort with early exit on a swap-free pass.
    Bubble,
    /// Insertion sort by adjacent swaps.
    Insertion,
    /// Heap sort over a bottom-up max-heap.
    Heap,
    /// Top-down merge sort with an alternating auxiliary buffer.
    Merge,
    /// Quick sort partitioning around the middle element.
    Quick,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Insertion,
        Self::Heap,
        Self::Merge,
        Self::Quick,
    ];

    /// Returns the human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Heap => "Heap Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
        }
    }

    /// Returns the short identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Heap => "heap",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string names no known [`Algorithm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown algorithm; expected one of bubble, insertion, heap, merge, quick")
    }
}

impl core::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a short identifier (`"merge"`) or display name
    /// (`"Merge Sort"`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| s.eq_ignore_ascii_case(a.as_str()) || s.eq_ignore_ascii_case(a.display_name()))
            .ok_or(ParseAlgorithmError)
    }
}

/// Which of the two mirrored arrays a session renders to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The left-hand array.
    A,
    /// The right-hand array.
    B,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::A, Self::B];

    /// Returns a zero-based index, usable for per-side tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "a",
            Self::B => "b",
        })
    }
}

/// Error returned when a string names no [`Side`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseSideError;

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown side; expected a/left or b/right")
    }
}

impl core::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("a") || s.eq_ignore_ascii_case("left") {
            Ok(Self::A)
        } else if s.eq_ignore_ascii_case("b") || s.eq_ignore_ascii_case("right") {
            Ok(Self::B)
        } else {
            Err(ParseSideError)
        }
    }
}

/// Invalid configuration values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A speed slider position above [`SpeedSetting::MAX`].
    SpeedOutOfRange {
        /// The rejected slider position.
        slider: u8,
    },
    /// A generator height range that is empty or not strictly positive.
    InvalidHeightRange {
        /// Inclusive lower bound.
        min: u32,
        /// Exclusive upper bound.
        max: u32,
    },
    /// A merge delay ratio with a zero denominator.
    ZeroDenominator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeedOutOfRange { slider } => write!(
                f,
                "speed slider {slider} out of range 0..={}",
                SpeedSetting::MAX
            ),
            Self::InvalidHeightRange { min, max } => {
                write!(f, "height range [{min}, {max}) must be non-empty and positive")
            }
            Self::ZeroDenominator => f.write_str("merge delay ratio denominator must not be zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// An animation-speed slider position.
///
/// Larger positions animate faster: the per-step delay is
/// [`MAX_DELAY_MS`](Self::MAX_DELAY_MS) minus the slider position, in
/// milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedSetting(u8);

impl SpeedSetting {
    /// Delay at the slowest position, in milliseconds.
    pub const MAX_DELAY_MS: u64 = 25;
    /// Fastest slider position.
    pub const MAX: u8 = 22;
    /// The middle of the slider, used when nothing was chosen.
    pub const DEFAULT: Self = Self(Self::MAX / 2);

    /// Validates a slider position.
    pub const fn new(slider: u8) -> Result<Self, ConfigError> {
        if slider > Self::MAX {
            Err(ConfigError::SpeedOutOfRange { slider })
        } else {
            Ok(Self(slider))
        }
    }

    /// Returns the raw slider position.
    #[must_use]
    pub const fn slider(self) -> u8 {
        self.0
    }

    /// Returns the per-step delay for this position.
    #[must_use]
    pub const fn delay(self) -> Duration {
        Duration::from_millis(Self::MAX_DELAY_MS - self.0 as u64)
    }
}

impl Default for SpeedSetting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What happens to callbacks still pending from an earlier session on the
/// same side when a new session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RetriggerPolicy {
    /// Stale callbacks keep firing on their original schedule.
    ///
    /// Rapid re-triggering therefore interleaves two animations on the same
    /// bars. This matches plain fire-and-forget timers.
    #[default]
    Overlap,
    /// Starting a session supersedes every earlier session on that side.
    ///
    /// Stale callbacks still wake up but detect the newer session epoch and
    /// skip their rendering effect.
    Supersede,
}

/// Global pacing constants shared by every session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaybackConfig {
    /// Numerator of the step-spacing factor for merge-shaped traces.
    pub merge_delay_numer: u32,
    /// Denominator of the step-spacing factor for merge-shaped traces.
    pub merge_delay_denom: u32,
}

impl PlaybackConfig {
    /// The standard pacing: merge-shaped traces advance at 2/3 of the
    /// per-step delay, so a compare/release/commit triple takes as long as a
    /// compare/commit pair.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            merge_delay_numer: 2,
            merge_delay_denom: 3,
        }
    }

    /// Uniform pacing: every trace shape uses the plain per-step delay.
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            merge_delay_numer: 1,
            merge_delay_denom: 1,
        }
    }

    /// Checks that the merge ratio is usable.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.merge_delay_denom == 0 {
            Err(ConfigError::ZeroDenominator)
        } else {
            Ok(self)
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything one side needs to record and replay a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionConfig {
    /// Algorithm to record.
    pub algorithm: Algorithm,
    /// Delay between consecutive steps, before any shape factor.
    pub delay: Duration,
    /// Array the session renders to.
    pub side: Side,
    /// Treatment of callbacks left over from earlier sessions on this side.
    pub retrigger: RetriggerPolicy,
}

impl SessionConfig {
    /// Creates a configuration with the default re-trigger policy.
    #[must_use]
    pub const fn new(algorithm: Algorithm, delay: Duration, side: Side) -> Self {
        Self {
            algorithm,
            delay,
            side,
            retrigger: RetriggerPolicy::Overlap,
        }
    }

    /// Creates a configuration whose delay comes from a speed slider.
    #[must_use]
    pub const fn with_speed(algorithm: Algorithm, speed: SpeedSetting, side: Side) -> Self {
        Self::new(algorithm, speed.delay(), side)
    }

    /// Returns a copy using the given re-trigger policy.
    #[must_use]
    pub const fn retrigger(mut self, policy: RetriggerPolicy) -> Self {
        self.retrigger = policy;
        self
    }
}
