//! Deterministic random number generation for session setup.
//!
//! Same seed, same round order. Used only to shuffle the catalog when a
//! session is created with [`crate::GameSession::shuffled`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG for per-session randomness.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
}

impl SessionRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        use rand::Rng;
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
