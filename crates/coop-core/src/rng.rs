//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from the configured seed and
//! threaded explicitly through every sampling call — arrival gaps, nest
//! choice, hen choice, residence durations.  Processing order is fully
//! deterministic (the event queue breaks time ties by insertion order), so
//! the draw sequence is too: the same seed always reproduces the same run,
//! byte for byte.
//!
//! There is deliberately no global or thread-local state.  Parameter sweeps
//! run many sims in parallel by giving each its own `SimRng`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The run-level deterministic RNG.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand`/`rand_distr`
    /// distribution types (`dist.sample(rng.inner())`).
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
