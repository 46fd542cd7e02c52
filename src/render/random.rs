//! Seeded random source shared by the randomized generators

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source for reproducible placement choices
///
/// Two instances built from the same seed yield identical sequences, which is
/// what makes each asset byte-identical across runs.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[low, high]`
    pub fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniform byte in `[low, high]`, used for alpha values
    pub fn byte_inclusive(&mut self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
