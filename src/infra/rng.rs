use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread-local генератор `rand`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick_index(&mut self, upper_inclusive: usize) -> usize {
        thread_rng().gen_range(0..=upper_inclusive)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed – одинаковая колода.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick_index(&mut self, upper_inclusive: usize) -> usize {
        self.inner.gen_range(0..=upper_inclusive)
    }
}
