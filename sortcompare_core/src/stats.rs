// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace statistics and side-by-side comparison.

use crate::config::{ConfigError, PlaybackConfig, Side};
use crate::playback::cue_offset;
use crate::steps::Trace;
use crate::time::Duration;

/// Summary of one recorded trace at a given pacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceStats {
    /// Total steps.
    pub steps: usize,
    /// Compare steps.
    pub compares: usize,
    /// Commit steps.
    pub commits: usize,
    /// Offset of the final cue from the session start.
    pub playback: Duration,
}

impl TraceStats {
    /// Measures `trace` as it would play back at `delay`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDenominator`] if `config` is invalid.
    pub fn of<T: Copy>(
        trace: &Trace<T>,
        delay: Duration,
        config: &PlaybackConfig,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let playback = match trace.len() {
            0 => Duration::ZERO,
            n => cue_offset(trace.shape(), delay, n - 1, &config),
        };
        Ok(Self {
            steps: trace.len(),
            compares: trace.compare_count(),
            commits: trace.commit_count(),
            playback,
        })
    }
}

/// Statistics for both sides of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Comparison {
    /// Left-hand statistics.
    pub a: TraceStats,
    /// Right-hand statistics.
    pub b: TraceStats,
}

impl Comparison {
    /// Pairs two sides' statistics.
    #[must_use]
    pub const fn new(a: TraceStats, b: TraceStats) -> Self {
        Self { a, b }
    }

    /// Returns the statistics for `side`.
    #[must_use]
    pub const fn side(&self, side: Side) -> &TraceStats {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Side whose animation finishes first, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.a.playback.cmp(&self.b.playback) {
            core::cmp::Ordering::Less => Some(Side::A),
            core::cmp::Ordering::Greater => Some(Side::B),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// How much sooner the leader finishes.
    #[must_use]
    pub fn margin(&self) -> Duration {
        self.a.playback.max(self.b.playback) - self.a.playback.min(self.b.playback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Algorithm;
    use crate::record::record;

    #[test]
    fn stats_count_steps_and_time() {
        let trace = record(Algorithm::Merge, &[4, 2]);
        let stats = TraceStats::of(&trace, Duration::from_millis(3), &PlaybackConfig::standard())
            .unwrap();
        assert_eq!(stats.steps, 6);
        assert_eq!(stats.compares, 4);
        assert_eq!(stats.commits, 2);
        // Step 5 at 5 × 3ms × 2/3.
        assert_eq!(stats.playback, Duration::from_millis(10));
    }

    #[test]
    fn empty_trace_plays_instantly() {
        let trace = record::<u32>(Algorithm::Heap, &[]);
        let stats = TraceStats::of(&trace, Duration::from_millis(9), &PlaybackConfig::standard())
            .unwrap();
        assert_eq!(stats.playback, Duration::ZERO);
    }

    #[test]
    fn leader_is_the_shorter_playback() {
        let values = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let delay = Duration::from_millis(5);
        let playback = PlaybackConfig::standard();
        let bubble = TraceStats::of(&record(Algorithm::Bubble, &values), delay, &playback).unwrap();
        let merge = TraceStats::of(&record(Algorithm::Merge, &values), delay, &playback).unwrap();

        let comparison = Comparison::new(bubble, merge);
        assert_eq!(comparison.leader(), Some(Side::B));
        assert_eq!(comparison.margin(), bubble.playback - merge.playback);
        assert_eq!(comparison.side(Side::A), &bubble);

        let tie = Comparison::new(merge, merge);
        assert_eq!(tie.leader(), None);
        assert_eq!(tie.margin(), Duration::ZERO);
    }
}
