// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion sort by adjacent swaps.

use super::StepLog;

/// Each element is shifted left one swap at a time while it is smaller than
/// its left neighbour. Only actual swaps are recorded.
pub(super) fn sort<T: Copy + PartialOrd>(values: &mut [T], log: &mut StepLog<T>) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j] < values[j - 1] {
            log.compare(j, j - 1);
            values.swap(j, j - 1);
            log.commit_pair(values, j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Algorithm;
    use crate::record::record;
    use crate::steps::{HeightUpdate, Step};

    #[test]
    fn sorted_input_records_nothing() {
        assert!(record(Algorithm::Insertion, &[1, 2, 2, 5]).is_empty());
    }

    #[test]
    fn one_step_per_swap() {
        let trace = record(Algorithm::Insertion, &[2, 3, 1]);
        assert_eq!(
            trace.steps(),
            &[
                Step::Compare(2, 1),
                Step::Commit {
                    first: HeightUpdate::new(2, 3),
                    second: Some(HeightUpdate::new(1, 1)),
                },
                Step::Compare(1, 0),
                Step::Commit {
                    first: HeightUpdate::new(1, 2),
                    second: Some(HeightUpdate::new(0, 1)),
                },
            ]
        );
    }

    #[test]
    fn equal_elements_are_not_swapped() {
        let trace = record(Algorithm::Insertion, &[2, 1, 1]);
        // Only the two 1s moving past the 2; they never pass each other.
        assert_eq!(trace.compare_count(), 2);
        assert_eq!(trace.replay(&[2, 1, 1]), [1, 1, 2]);
    }
}
