// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Steps and traces.
//!
//! A [`Trace`] is the flat, replayable record of one sort run. It is a list
//! of [`Step`]s in causal order:
//!
//! - [`Step::Compare`] names two positions under comparison and carries no
//!   values. Renderers highlight the two bars.
//! - [`Step::Commit`] carries one or two [`HeightUpdate`]s. Renderers resize
//!   the named bars and (for paired traces) clear their highlight.
//!
//! Every trace is tagged with a [`TraceShape`] so playback knows how to
//! interpret compare steps and how densely to space them.

use alloc::vec::Vec;

/// A new height for the bar at `pos`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeightUpdate<T> {
    /// Position in the array.
    pub pos: usize,
    /// Value now stored at `pos`.
    pub height: T,
}

impl<T> HeightUpdate<T> {
    /// Creates an update placing `height` at `pos`.
    #[inline]
    #[must_use]
    pub const fn new(pos: usize, height: T) -> Self {
        Self { pos, height }
    }
}

/// One atomic unit of a [`Trace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// Two positions are being compared.
    Compare(usize, usize),
    /// One or two positions take new heights.
    Commit {
        /// The first (always present) update.
        first: HeightUpdate<T>,
        /// The second update, for steps that touch a pair of bars.
        second: Option<HeightUpdate<T>>,
    },
}

impl<T: Copy> Step<T> {
    /// Returns `true` for [`Step::Compare`].
    #[inline]
    #[must_use]
    pub const fn is_compare(&self) -> bool {
        matches!(self, Self::Compare(..))
    }

    /// Iterates over the height updates carried by a commit step.
    ///
    /// Compare steps yield nothing.
    pub fn updates(&self) -> impl Iterator<Item = HeightUpdate<T>> {
        let (first, second) = match *self {
            Self::Compare(..) => (None, None),
            Self::Commit { first, second } => (Some(first), second),
        };
        first.into_iter().chain(second)
    }
}

/// How a trace lays out its steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TraceShape {
    /// Alternating compare / two-bar commit steps (bubble, insertion, quick,
    /// heap).
    #[default]
    Paired,
    /// Triples of highlight compare, release compare, one-bar commit (merge).
    ///
    /// These traces are denser per logical comparison, so playback spaces
    /// them more tightly.
    Merge,
}

/// The complete step record of one sort over one array snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Trace<T> {
    shape: TraceShape,
    steps: Vec<Step<T>>,
}

impl<T: Copy> Trace<T> {
    /// Creates a trace from raw parts.
    #[must_use]
    pub fn from_parts(shape: TraceShape, steps: Vec<Step<T>>) -> Self {
        Self { shape, steps }
    }

    /// Returns the trace's layout.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> TraceShape {
        self.shape
    }

    /// Returns the steps in order.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there is nothing to animate.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of compare steps.
    #[must_use]
    pub fn compare_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_compare()).count()
    }

    /// Number of commit steps.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.len() - self.compare_count()
    }

    /// Applies every commit, in order, to a copy of `initial`.
    ///
    /// For a trace recorded from `initial` this yields the sorted array.
    /// Updates addressing positions outside `initial` are ignored.
    #[must_use]
    pub fn replay(&self, initial: &[T]) -> Vec<T> {
        let mut out = initial.to_vec();
        for update in self.steps.iter().flat_map(Step::updates) {
            if let Some(slot) = out.get_mut(update.pos) {
                *slot = update.height;
            }
        }
        out
    }

    /// Consumes the trace and returns its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}
