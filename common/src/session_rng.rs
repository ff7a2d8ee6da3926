use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source owned by one game session.
pub struct SessionRng {
    rng: StdRng,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    /// Uniform index in `0..upper`. `upper` must be non-zero.
    pub fn index_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}
