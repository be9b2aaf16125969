// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred-callback hosts.
//!
//! Playback is single-threaded and cooperative: it hands every cue to a
//! [`TimerHost`] as a one-shot callback with a delay, then returns. The host
//! decides when callbacks run. Two guarantees are assumed of every host:
//!
//! 1. A callback never runs synchronously inside
//!    [`set_timeout`](TimerHost::set_timeout).
//! 2. Callbacks run in order of due time, and callbacks with equal due times
//!    run in the order they were scheduled.
//!
//! Browser `setTimeout` provides both; [`VirtualTimers`] provides both
//! deterministically, with time that only moves when told to.

use alloc::boxed::Box;
use alloc::collections::BinaryHeap;
use core::cmp::Ordering;

use crate::time::{Duration, HostTime};

/// A one-shot deferred callback.
pub type Callback = Box<dyn FnOnce()>;

/// Schedules one-shot callbacks after a delay.
pub trait TimerHost {
    /// Returns the host's current time.
    fn now(&self) -> HostTime;

    /// Runs `callback` once, no earlier than `delay` from [`now`](Self::now).
    fn set_timeout(&mut self, delay: Duration, callback: Callback);
}

struct Pending {
    due: HostTime,
    seq: u64,
    callback: Callback,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    /// Reversed so that the max-heap yields the earliest `(due, seq)` first.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

/// A deterministic in-memory timer queue.
///
/// Time starts at [`HostTime::ZERO`] and advances only through
/// [`advance_to`](Self::advance_to), [`advance_by`](Self::advance_by) and
/// [`run_until_idle`](Self::run_until_idle). While advancing, the clock is set
/// to each callback's due time before the callback runs, so
/// [`now`](TimerHost::now) observed by later scheduling reflects the firing
/// time.
#[derive(Default)]
pub struct VirtualTimers {
    now: HostTime,
    next_seq: u64,
    queue: BinaryHeap<Pending>,
    fired: u64,
}

impl core::fmt::Debug for VirtualTimers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualTimers")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

impl VirtualTimers {
    /// Creates an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of callbacks run so far.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Due time of the earliest pending callback.
    #[must_use]
    pub fn next_due(&self) -> Option<HostTime> {
        self.queue.peek().map(|p| p.due)
    }

    /// Runs every callback due at or before `target`, in order, then sets the
    /// clock to `target`. Returns how many callbacks ran.
    ///
    /// A `target` in the past leaves the clock where it is.
    pub fn advance_to(&mut self, target: HostTime) -> usize {
        let mut ran = 0;
        while self.queue.peek().is_some_and(|p| p.due <= target) {
            let Some(pending) = self.queue.pop() else {
                break;
            };
            self.now = self.now.max(pending.due);
            (pending.callback)();
            self.fired += 1;
            ran += 1;
        }
        self.now = self.now.max(target);
        ran
    }

    /// Advances the clock by `delay`.
    pub fn advance_by(&mut self, delay: Duration) -> usize {
        self.advance_to(self.now.saturating_add(delay))
    }

    /// Runs every pending callback. Returns how many ran.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            ran += self.advance_to(due);
        }
        ran
    }
}

impl TimerHost for VirtualTimers {
    fn now(&self) -> HostTime {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration, callback: Callback) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Pending {
            due: self.now.saturating_add(delay),
            seq,
            callback,
        });
    }
}
