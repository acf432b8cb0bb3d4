//! Deterministic RNG for reproducible map generation.
//!
//! The planner itself never draws randomness.  `SeedRng` exists so demos and
//! tests can generate obstacle fields and start/goal pairs that are identical
//! from run to run: the same seed always yields the same map.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded `SmallRng` wrapper.
pub struct SeedRng(SmallRng);

impl SeedRng {
    pub fn new(seed: u64) -> Self {
        SeedRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
