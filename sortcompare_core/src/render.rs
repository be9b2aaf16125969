// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering target contract.
//!
//! Playback never touches a UI tree directly. It drives a [`RenderTarget`],
//! a per-position interface with three idempotent operations: highlight a
//! bar, return it to its default state, and set its height. Each side of a
//! comparison gets its own target, so sessions never address each other's
//! bars.
//!
//! [`Bars`] is an in-memory target that keeps the latest state of every bar.
//! It backs tests and headless runs; platform backends implement the trait
//! over their native elements.

use alloc::vec::Vec;

/// Applies per-bar visual updates.
///
/// Positions outside the target's range are ignored by well-behaved
/// implementations.
pub trait RenderTarget<T> {
    /// Marks the bar at `pos` as under comparison.
    fn set_highlight(&mut self, pos: usize);

    /// Returns the bar at `pos` to its resting state.
    fn set_default(&mut self, pos: usize);

    /// Sets the height of the bar at `pos`.
    fn set_height(&mut self, pos: usize, height: T);
}

/// Visual state of a single bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BarState {
    /// Resting.
    #[default]
    Default,
    /// Under comparison.
    Highlighted,
}

/// A bar's height and visual state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bar<T> {
    /// Current height.
    pub height: T,
    /// Current visual state.
    pub state: BarState,
}

/// An in-memory bar collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bars<T> {
    bars: Vec<Bar<T>>,
    updates: u64,
}

impl<T: Copy> Bars<T> {
    /// Creates one resting bar per value.
    #[must_use]
    pub fn new(heights: &[T]) -> Self {
        Self {
            bars: heights
                .iter()
                .map(|&height| Bar {
                    height,
                    state: BarState::Default,
                })
                .collect(),
            updates: 0,
        }
    }

    /// Returns every bar.
    #[must_use]
    pub fn bars(&self) -> &[Bar<T>] {
        &self.bars
    }

    /// Returns the current heights in position order.
    #[must_use]
    pub fn heights(&self) -> Vec<T> {
        self.bars.iter().map(|b| b.height).collect()
    }

    /// Returns the positions currently highlighted.
    #[must_use]
    pub fn highlighted(&self) -> Vec<usize> {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, b)| b.state == BarState::Highlighted)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of in-range operations applied so far.
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.updates
    }

    fn bar_mut(&mut self, pos: usize) -> Option<&mut Bar<T>> {
        let bar = self.bars.get_mut(pos)?;
        self.updates += 1;
        Some(bar)
    }
}

impl<T: Copy> RenderTarget<T> for Bars<T> {
    fn set_highlight(&mut self, pos: usize) {
        if let Some(bar) = self.bar_mut(pos) {
            bar.state = BarState::Highlighted;
        }
    }

    fn set_default(&mut self, pos: usize) {
        if let Some(bar) = self.bar_mut(pos) {
            bar.state = BarState::Default;
        }
    }

    fn set_height(&mut self, pos: usize, height: T) {
        if let Some(bar) = self.bar_mut(pos) {
            bar.height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn new_bars_rest_at_given_heights() {
        let bars = Bars::new(&[3_u32, 1, 2]);
        assert_eq!(bars.heights(), vec![3, 1, 2]);
        assert!(bars.highlighted().is_empty());
        assert_eq!(bars.update_count(), 0);
    }

    #[test]
    fn operations_are_idempotent() {
        let mut bars = Bars::new(&[3_u32, 1]);
        bars.set_highlight(1);
        bars.set_highlight(1);
        assert_eq!(bars.highlighted(), vec![1]);
        bars.set_height(0, 9);
        bars.set_height(0, 9);
        bars.set_default(1);
        assert_eq!(bars.heights(), vec![9, 1]);
        assert!(bars.highlighted().is_empty());
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let mut bars = Bars::new(&[1_u32]);
        bars.set_highlight(4);
        bars.set_height(4, 2);
        assert_eq!(bars.heights(), vec![1]);
        assert_eq!(bars.update_count(), 0);
    }
}
