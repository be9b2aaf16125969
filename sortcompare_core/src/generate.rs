// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random input arrays.
//!
//! Both sides of a comparison must sort the same values, so the generator
//! always produces a [`SeededPair`] of identical arrays. Heights are bar
//! heights in pixels, drawn uniformly from `[min_height, max_height)`.
//! Picking the count and bounds (for example from the window size) is up to
//! the caller.

use alloc::vec::Vec;

use rand::Rng;

use crate::config::{ConfigError, Side};

/// Shortest bar, in pixels.
pub const MIN_BAR_HEIGHT: u32 = 50;

/// Produces pairs of identical random arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArrayGenerator {
    count: usize,
    min_height: u32,
    max_height: u32,
}

impl ArrayGenerator {
    /// Creates a generator of `count` values in `[min_height, max_height)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeightRange`] unless
    /// `0 < min_height < max_height`.
    pub const fn new(count: usize, min_height: u32, max_height: u32) -> Result<Self, ConfigError> {
        if min_height == 0 || min_height >= max_height {
            return Err(ConfigError::InvalidHeightRange {
                min: min_height,
                max: max_height,
            });
        }
        Ok(Self {
            count,
            min_height,
            max_height,
        })
    }

    /// Number of values per array.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Inclusive lower bound on heights.
    #[must_use]
    pub const fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Exclusive upper bound on heights.
    #[must_use]
    pub const fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Draws a fresh pair of identical arrays.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> SeededPair {
        let values: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(self.min_height..self.max_height))
            .collect();
        SeededPair {
            a: values.clone(),
            b: values,
        }
    }
}

/// Two arrays holding the same values, one per [`Side`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeededPair {
    /// Values for [`Side::A`].
    pub a: Vec<u32>,
    /// Values for [`Side::B`].
    pub b: Vec<u32>,
}

impl SeededPair {
    /// Returns the array for `side`.
    #[must_use]
    pub fn side(&self, side: Side) -> &[u32] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            ArrayGenerator::new(10, 0, 5),
            Err(ConfigError::InvalidHeightRange { min: 0, max: 5 })
        );
        assert_eq!(
            ArrayGenerator::new(10, 9, 9),
            Err(ConfigError::InvalidHeightRange { min: 9, max: 9 })
        );
        assert!(ArrayGenerator::new(0, 1, 2).is_ok());
    }

    #[test]
    fn pair_sides_match_and_stay_in_range() {
        let generator = ArrayGenerator::new(64, 50, 60).unwrap();
        let pair = generator.generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(pair.a.len(), 64);
        assert_eq!(pair.a, pair.b);
        assert_eq!(pair.side(Side::B), pair.a.as_slice());
        assert!(pair.a.iter().all(|v| (50..60).contains(v)), "{:?}", pair.a);
    }

    #[test]
    fn same_seed_same_values() {
        let generator = ArrayGenerator::new(32, 50, 500).unwrap();
        let first = generator.generate(&mut StdRng::seed_from_u64(99));
        let second = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn count_and_bounds_come_from_the_caller() {
        let generator = ArrayGenerator::new(3, MIN_BAR_HEIGHT, MIN_BAR_HEIGHT + 1).unwrap();
        assert_eq!(generator.count(), 3);
        assert_eq!(generator.max_height(), MIN_BAR_HEIGHT + 1);
        let pair = generator.generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(pair.a, [MIN_BAR_HEIGHT; 3]);
    }
}
