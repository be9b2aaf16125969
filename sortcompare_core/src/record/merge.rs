// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-down merge sort with an alternating auxiliary buffer.
//!
//! The main and auxiliary buffers start as identical copies and swap roles
//! at every recursion level: each level sorts its halves *into* the other
//! buffer, then merges them back. No copying between levels is needed.
//!
//! Positions in the emitted steps are bar positions; which buffer a commit
//! lands in at a given depth is invisible to the renderer, and the outermost
//! merge rewrites every position with its final value.

use alloc::vec::Vec;

use super::StepLog;

pub(super) fn sort<T: Copy + PartialOrd>(values: &mut [T], log: &mut StepLog<T>) {
    let mut aux: Vec<T> = values.to_vec();
    let end = values.len() - 1;
    sort_range(values, &mut aux, 0, end, log);
}

/// Sorts `main[start..=end]`, using `aux` as scratch.
fn sort_range<T: Copy + PartialOrd>(
    main: &mut [T],
    aux: &mut [T],
    start: usize,
    end: usize,
    log: &mut StepLog<T>,
) {
    if start == end {
        return;
    }
    let mid = start + (end - start) / 2;
    sort_range(aux, main, start, mid, log);
    sort_range(aux, main, mid + 1, end, log);
    merge(main, aux, start, mid, end, log);
}

/// Merges the sorted runs `aux[start..=mid]` and `aux[mid + 1..=end]` into
/// `main[start..=end]`.
///
/// Every element taken emits a highlight compare, an identical release
/// compare, and a one-bar commit.
fn merge<T: Copy + PartialOrd>(
    main: &mut [T],
    aux: &[T],
    start: usize,
    mid: usize,
    end: usize,
    log: &mut StepLog<T>,
) {
    let (mut i, mut j, mut k) = (start, mid + 1, start);

    while i <= mid && j <= end {
        log.compare(i, j);
        log.compare(i, j);
        let taken = if aux[i] <= aux[j] {
            i += 1;
            aux[i - 1]
        } else {
            j += 1;
            aux[j - 1]
        };
        log.commit_one(k, taken);
        main[k] = taken;
        k += 1;
    }

    for run in [i..=mid, j..=end] {
        for p in run {
            log.compare(p, p);
            log.compare(p, p);
            log.commit_one(k, aux[p]);
            main[k] = aux[p];
            k += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Algorithm;
    use crate::record::record;
    use crate::steps::{HeightUpdate, Step};

    fn one(pos: usize, height: i32) -> Step<i32> {
        Step::Commit {
            first: HeightUpdate::new(pos, height),
            second: None,
        }
    }

    #[test]
    fn four_two() {
        let trace = record(Algorithm::Merge, &[4, 2]);
        assert_eq!(
            trace.steps(),
            &[
                Step::Compare(0, 1),
                Step::Compare(0, 1),
                one(0, 2),
                Step::Compare(0, 0),
                Step::Compare(0, 0),
                one(1, 4),
            ]
        );
        assert_eq!(trace.replay(&[4, 2]), [2, 4]);
    }

    #[test]
    fn one_commit_per_element_per_level() {
        // 8 elements: three merge levels, each writing all 8 positions.
        let trace = record(Algorithm::Merge, &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(trace.commit_count(), 24);
        assert_eq!(trace.compare_count(), 48);
    }

    #[test]
    fn stable_on_ties() {
        // Ties take from the left run first.
        let trace = record(Algorithm::Merge, &[1, 1]);
        assert_eq!(trace.steps()[2], one(0, 1));
        assert_eq!(trace.steps()[3], Step::Compare(1, 1));
    }
}
