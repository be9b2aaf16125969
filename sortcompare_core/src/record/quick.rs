// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quick sort partitioning around the middle element.

use super::StepLog;

pub(super) fn sort<T: Copy + PartialOrd>(values: &mut [T], log: &mut StepLog<T>) {
    let end = values.len() - 1;
    sort_range(values, 0, end, log);
}

/// Sorts `values[start..=end]`. Sub-ranges shorter than two elements are not
/// recursed into.
fn sort_range<T: Copy + PartialOrd>(
    values: &mut [T],
    start: usize,
    end: usize,
    log: &mut StepLog<T>,
) {
    let split = partition(values, start, end, log);
    if start + 1 < split {
        sort_range(values, start, split - 1, log);
    }
    if split < end {
        sort_range(values, split, end, log);
    }
}

/// Partitions `values[start..=end]` around the value at the middle index and
/// returns the first index of the right part.
///
/// Each pointer advance records a compare against the pivot position and a
/// commit restating both bars; each cross-pointer swap records a compare and
/// a commit of the swapped pair.
fn partition<T: Copy + PartialOrd>(
    values: &mut [T],
    start: usize,
    end: usize,
    log: &mut StepLog<T>,
) -> usize {
    let mid = start + (end - start) / 2;
    let pivot = values[mid];

    // `j` may step one below `start`, so both cursors are tracked one-based.
    let mut i = start + 1;
    let mut j = end + 1;
    while i <= j {
        while values[i - 1] < pivot {
            log.compare(i - 1, mid);
            log.commit_pair(values, i - 1, mid);
            i += 1;
        }
        while values[j - 1] > pivot {
            log.compare(j - 1, mid);
            log.commit_pair(values, j - 1, mid);
            j -= 1;
        }
        if i <= j {
            log.compare(i - 1, j - 1);
            values.swap(i - 1, j - 1);
            log.commit_pair(values, i - 1, j - 1);
            i += 1;
            j -= 1;
        }
    }
    i - 1
}

#[cfg(test)]
mod tests {
    use crate::config::Algorithm;
    use crate::record::record;
    use crate::steps::{HeightUpdate, Step};

    #[test]
    fn pivot_is_middle_index() {
        // (0 + 3) / 2 = 1, so the pivot is 9. Both left-scan compares of the
        // first partition target index 1; a first-element pivot (2) would
        // open with the right scan at `Compare(3, 0)` instead.
        let values = [2, 9, 1, 7];
        let trace = record(Algorithm::Quick, &values);
        assert_eq!(trace.steps()[0], Step::Compare(0, 1));
        assert_eq!(trace.steps()[2], Step::Compare(1, 3));
        assert_eq!(trace.steps()[4], Step::Compare(2, 1));
        assert_eq!(trace.replay(&values), [1, 2, 7, 9]);

        let values = [5, 3, 8, 1];
        assert_eq!(record(Algorithm::Quick, &values).replay(&values), [1, 3, 5, 8]);
    }

    #[test]
    fn scan_compares_against_pivot_position() {
        // Pivot 5 at index 1; the left scan passes index 0 (value 1).
        let trace = record(Algorithm::Quick, &[1, 5, 9]);
        assert_eq!(trace.steps()[0], Step::Compare(0, 1));
        assert_eq!(
            trace.steps()[1],
            Step::Commit {
                first: HeightUpdate::new(0, 1),
                second: Some(HeightUpdate::new(1, 5)),
            }
        );
        assert_eq!(trace.steps()[2], Step::Compare(2, 1));
    }

    #[test]
    fn pivot_commits_track_moved_pivot() {
        // The pivot value moves during partitioning; commits always restate
        // the live value at the pivot index so replay stays exact.
        let values = [3, 9, 1, 7, 2, 8, 2];
        let trace = record(Algorithm::Quick, &values);
        assert_eq!(trace.replay(&values), [1, 2, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn all_equal_terminates() {
        let values = [4; 9];
        let trace = record(Algorithm::Quick, &values);
        assert_eq!(trace.replay(&values), [4; 9]);
        assert!(!trace.is_empty());
    }
}
