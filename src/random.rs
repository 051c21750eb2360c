//! Randomness source used for shuffles and picks, swappable for deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source.
pub trait RandomnessProvider {
    /// Uniform integer in `0..upper`. `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// Thread-local OS-seeded generator (production default).
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomnessProvider for ThreadRandom {
    fn below(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible generator from a fixed seed.
#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomnessProvider for SeededRandom {
    fn below(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}
