//! Deterministic random number generation.
//!
//! All random selection in the crate (owner succession, czar assignment,
//! pack sampling) goes through `GameRng`, so selection is uniform and
//! reproducible under a fixed seed.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces an identical sequence
//! - **Uniform**: `choose` and `sample` draw without bias
//!
//! ## Usage
//!
//! ```
//! use card_czar::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let picked = rng.choose(&[1, 2, 3]).copied();
//! assert!(picked.is_some());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for every random selection in the crate.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a new RNG seeded from the operating system.
    ///
    /// For production sessions; tests use [`GameRng::new`] for
    /// reproducibility.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw up to `amount` distinct elements uniformly, in random order.
    ///
    /// Returns the whole slice (shuffled) when `amount` exceeds its length.
    #[must_use]
    pub fn sample<'a, T>(&mut self, slice: &'a [T], amount: usize) -> Vec<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.inner, amount).collect()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
