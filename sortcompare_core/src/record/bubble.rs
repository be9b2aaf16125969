// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble sort.

use super::StepLog;

/// Every adjacent pair examined yields a compare and a commit of both
/// positions, swapped or not. Stops after the first pass with no swaps.
pub(super) fn sort<T: Copy + PartialOrd>(values: &mut [T], log: &mut StepLog<T>) {
    let n = values.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            log.compare(j, j + 1);
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
            log.commit_pair(values, j, j + 1);
        }
        if !swapped {
            return;
        }
    }
}
