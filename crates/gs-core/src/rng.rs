//! Deterministic RNG wrapper.
//!
//! Every `World` owns one `SimRng`.  It is the only source of randomness in
//! the core: it places targets and picks the initial direction.  Batch runs
//! derive one seed per run with [`SimRng::run_seed`], so run *i* of a batch is
//! identical whether the batch runs sequentially or in parallel.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Cell, Direction, Grid};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded simulation RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed for run `index` of a batch rooted at `base_seed`.
    ///
    /// Consecutive indices are spread across the seed space, and adding runs
    /// to the end of a batch never changes the seeds of earlier runs.
    #[inline]
    pub fn run_seed(base_seed: u64, index: u64) -> u64 {
        base_seed ^ index.wrapping_add(1).wrapping_mul(MIXING_CONSTANT)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly random in-bounds cell: one independent sample per axis.
    #[inline]
    pub fn random_cell(&mut self, grid: &Grid) -> Cell {
        let x = self.0.gen_range(0..grid.width());
        let y = self.0.gen_range(0..grid.height());
        Cell::new(x as i32, y as i32)
    }

    #[inline]
    pub fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.0.gen_range(0..Direction::ALL.len())]
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
