// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumented sorting algorithms.
//!
//! Each algorithm sorts a private copy of its input and, as a side effect,
//! appends [`Step`]s to a [`StepLog`]. [`record`] dispatches on
//! [`Algorithm`] and wraps the log in a [`Trace`]. Recording is synchronous,
//! has no notion of time, and is a pure function of the input values:
//!
//! ```rust
//! use sortcompare_core::config::Algorithm;
//! use sortcompare_core::record::record;
//!
//! let input = [3, 1, 2];
//! let trace = record(Algorithm::Bubble, &input);
//! assert_eq!(trace.replay(&input), [1, 2, 3]);
//! ```
//!
//! Inputs of length 0 or 1 are already sorted and produce an empty trace.
//!
//! Values only need [`PartialOrd`]; a meaningful result assumes a total
//! order (no NaN). Unordered values still terminate and stay memory-safe.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;

use alloc::vec::Vec;

use crate::config::{Algorithm, Side};
use crate::steps::{HeightUpdate, Step, Trace, TraceShape};
use crate::trace::{TraceRecordedEvent, Tracer};

/// Append-only step buffer shared by the algorithm implementations.
#[derive(Debug)]
pub(crate) struct StepLog<T> {
    steps: Vec<Step<T>>,
}

impl<T: Copy> StepLog<T> {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Positions `a` and `b` are compared.
    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        self.steps.push(Step::Compare(a, b));
    }

    /// Positions `a` and `b` now hold `values[a]` and `values[b]`.
    pub(crate) fn commit_pair(&mut self, values: &[T], a: usize, b: usize) {
        self.steps.push(Step::Commit {
            first: HeightUpdate::new(a, values[a]),
            second: Some(HeightUpdate::new(b, values[b])),
        });
    }

    /// Position `pos` now holds `height`.
    pub(crate) fn commit_one(&mut self, pos: usize, height: T) {
        self.steps.push(Step::Commit {
            first: HeightUpdate::new(pos, height),
            second: None,
        });
    }

    fn finish(self, shape: TraceShape) -> Trace<T> {
        Trace::from_parts(shape, self.steps)
    }
}

/// Records the trace of sorting `values` with `algorithm`.
///
/// `values` is copied; the caller's slice is never mutated.
#[must_use]
pub fn record<T: Copy + PartialOrd>(algorithm: Algorithm, values: &[T]) -> Trace<T> {
    let shape = shape_of(algorithm);
    if values.len() <= 1 {
        return Trace::from_parts(shape, Vec::new());
    }

    let mut work = values.to_vec();
    let mut log = StepLog::new();
    match algorithm {
        Algorithm::Bubble => bubble::sort(&mut work, &mut log),
        Algorithm::Insertion => insertion::sort(&mut work, &mut log),
        Algorithm::Heap => heap::sort(&mut work, &mut log),
        Algorithm::Merge => merge::sort(&mut work, &mut log),
        Algorithm::Quick => quick::sort(&mut work, &mut log),
    }
    log.finish(shape)
}

/// Like [`record`], additionally reporting a [`TraceRecordedEvent`] for
/// `side` through `tracer`.
#[must_use]
pub fn record_traced<T: Copy + PartialOrd>(
    algorithm: Algorithm,
    side: Side,
    values: &[T],
    tracer: &mut Tracer<'_>,
) -> Trace<T> {
    let trace = record(algorithm, values);
    tracer.trace_recorded(&TraceRecordedEvent {
        algorithm,
        side,
        len: values.len(),
        steps: trace.len(),
        compares: trace.compare_count(),
        commits: trace.commit_count(),
    });
    trace
}

/// Returns the step layout `algorithm` produces.
#[must_use]
pub const fn shape_of(algorithm: Algorithm) -> TraceShape {
    match algorithm {
        Algorithm::Merge => TraceShape::Merge,
        Algorithm::Bubble | Algorithm::Insertion | Algorithm::Heap | Algorithm::Quick => {
            TraceShape::Paired
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn sorted(values: &[i32]) -> Vec<i32> {
        let mut v = values.to_vec();
        v.sort_unstable();
        v
    }

    fn check_replays_to_sorted(values: &[i32]) {
        for algorithm in Algorithm::ALL {
            let trace = record(algorithm, values);
            assert_eq!(
                trace.replay(values),
                sorted(values),
                "{algorithm} failed to sort {values:?}"
            );
        }
    }

    #[test]
    fn trivial_inputs_record_nothing() {
        for algorithm in Algorithm::ALL {
            assert!(record::<u32>(algorithm, &[]).is_empty(), "{algorithm} on []");
            assert!(record(algorithm, &[7_u32]).is_empty(), "{algorithm} on [7]");
        }
    }

    #[test]
    fn shapes_follow_algorithm() {
        assert_eq!(record(Algorithm::Merge, &[2, 1]).shape(), TraceShape::Merge);
        assert_eq!(record(Algorithm::Quick, &[2, 1]).shape(), TraceShape::Paired);
        // Even an empty trace carries the algorithm's shape.
        assert_eq!(record::<u8>(Algorithm::Merge, &[]).shape(), TraceShape::Merge);
    }

    #[test]
    fn small_fixed_inputs_replay_to_sorted() {
        check_replays_to_sorted(&[2, 1]);
        check_replays_to_sorted(&[1, 2]);
        check_replays_to_sorted(&[3, 1, 2]);
        check_replays_to_sorted(&[5, 3, 8, 1]);
        check_replays_to_sorted(&[4, 4, 4, 4]);
        check_replays_to_sorted(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        check_replays_to_sorted(&[1, 3, 1, 3, 1, 3, 2]);
        check_replays_to_sorted(&[-4, 0, 12, -4, 7]);
    }

    #[test]
    fn random_inputs_replay_to_sorted() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.random_range(0..40);
            let values: Vec<i32> = (0..len).map(|_| rng.random_range(-20..20)).collect();
            check_replays_to_sorted(&values);
        }
    }

    #[test]
    fn recording_is_deterministic() {
        let values = [13, 2, 8, 8, 1, 21, 5, 3];
        for algorithm in Algorithm::ALL {
            let copy_a = values;
            let copy_b = values;
            assert_eq!(record(algorithm, &copy_a), record(algorithm, &copy_b));
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let values = vec![3, 2, 1];
        let _ = record(Algorithm::Heap, &values);
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn paired_traces_alternate_compare_and_commit() {
        let values = [6, 2, 9, 1, 5, 5, 0];
        for algorithm in [
            Algorithm::Bubble,
            Algorithm::Insertion,
            Algorithm::Heap,
            Algorithm::Quick,
        ] {
            let trace = record(algorithm, &values);
            assert_eq!(trace.len() % 2, 0, "{algorithm} trace length is odd");
            for (i, step) in trace.steps().iter().enumerate() {
                assert_eq!(step.is_compare(), i % 2 == 0, "{algorithm} step {i}");
                if !step.is_compare() {
                    assert_eq!(step.updates().count(), 2, "{algorithm} step {i}");
                }
            }
        }
    }

    #[test]
    fn merge_traces_come_in_triples() {
        let trace = record(Algorithm::Merge, &[6, 2, 9, 1, 5, 5, 0]);
        assert_eq!(trace.len() % 3, 0);
        for triple in trace.steps().chunks(3) {
            assert!(triple[0].is_compare());
            assert_eq!(triple[0], triple[1], "release repeats the highlight");
            assert_eq!(triple[2].updates().count(), 1);
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn record_traced_reports_counts() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Counts(Vec<TraceRecordedEvent>);
        impl TraceSink for Counts {
            fn on_trace_recorded(&mut self, e: &TraceRecordedEvent) {
                self.0.push(*e);
            }
        }

        let mut sink = Counts::default();
        let mut tracer = Tracer::new(&mut sink);
        let trace = record_traced(Algorithm::Bubble, Side::B, &[3, 1, 2], &mut tracer);
        drop(tracer);

        assert_eq!(sink.0.len(), 1);
        let e = sink.0[0];
        assert_eq!(e.side, Side::B);
        assert_eq!(e.len, 3);
        assert_eq!(e.steps, trace.len());
        assert_eq!(e.compares + e.commits, e.steps);
    }
}
