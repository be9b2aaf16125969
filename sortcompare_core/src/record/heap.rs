// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heap sort over a max-heap.

use super::StepLog;

/// Builds a max-heap bottom-up, then repeatedly moves the root to the end of
/// the shrinking heap. Steps are recorded only for real swaps, plus the final
/// root-on-root extraction.
pub(super) fn sort<T: Copy + PartialOrd>(values: &mut [T], log: &mut StepLog<T>) {
    let n = values.len();
    for root in (0..n / 2).rev() {
        sift_down(values, n, root, log);
    }

    for end in (0..n).rev() {
        log.compare(0, end);
        values.swap(0, end);
        log.commit_pair(values, 0, end);
        sift_down(values, end, 0, log);
    }
}

/// Restores the heap property for the subtree at `root` within
/// `values[..end]`.
fn sift_down<T: Copy + PartialOrd>(
    values: &mut [T],
    end: usize,
    mut root: usize,
    log: &mut StepLog<T>,
) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;
        if left < end && values[left] > values[largest] {
            largest = left;
        }
        if right < end && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        log.compare(root, largest);
        values.swap(root, largest);
        log.commit_pair(values, root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Algorithm;
    use crate::record::record;
    use crate::steps::{HeightUpdate, Step};

    #[test]
    fn singleton_records_nothing() {
        assert!(record(Algorithm::Heap, &[1]).is_empty());
    }

    #[test]
    fn two_elements() {
        // [1, 2]: heapify swaps 0↔1, extraction swaps root 2 to the end, and
        // the last extraction swaps the root with itself.
        let trace = record(Algorithm::Heap, &[1, 2]);
        assert_eq!(trace.len(), 6);
        assert_eq!(
            trace.steps(),
            &[
                Step::Compare(0, 1),
                Step::Commit {
                    first: HeightUpdate::new(0, 2),
                    second: Some(HeightUpdate::new(1, 1)),
                },
                Step::Compare(0, 1),
                Step::Commit {
                    first: HeightUpdate::new(0, 1),
                    second: Some(HeightUpdate::new(1, 2)),
                },
                Step::Compare(0, 0),
                Step::Commit {
                    first: HeightUpdate::new(0, 1),
                    second: Some(HeightUpdate::new(0, 1)),
                },
            ]
        );
    }

    #[test]
    fn every_extraction_is_recorded() {
        // A valid max-heap needs no heapify swaps; each of the n extractions
        // still records one compare, ending with the root against itself.
        let values = [5, 4, 3, 2, 1];
        let trace = record(Algorithm::Heap, &values);
        let extraction_roots = trace
            .steps()
            .iter()
            .filter(|s| matches!(s, Step::Compare(0, _)))
            .count();
        assert!(extraction_roots >= values.len());
        assert_eq!(trace.steps()[trace.len() - 2], Step::Compare(0, 0));
        assert_eq!(trace.replay(&values), [1, 2, 3, 4, 5]);
    }
}
