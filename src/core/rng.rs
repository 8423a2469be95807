//! Random identifier generation for saved decks.
//!
//! Deck ids are short random base-36 strings. They are not durable and
//! carry no meaning; a seeded generator makes them reproducible in tests.
//!
//! ```
//! use swu_deckbuilder::core::IdRng;
//!
//! let mut a = IdRng::new(42);
//! let mut b = IdRng::new(42);
//! assert_eq!(a.next_id(), b.next_id());
//! assert_eq!(a.next_id().len(), 7);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Characters used in generated ids.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated deck ids.
pub const ID_LEN: usize = 7;

/// Deterministic id generator.
#[derive(Clone, Debug)]
pub struct IdRng {
    inner: ChaCha8Rng,
}

impl IdRng {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Generate the next base-36 id.
    pub fn next_id(&mut self) -> String {
        (0..ID_LEN)
            .map(|_| {
                let idx = self.inner.gen_range(0..ID_ALPHABET.len());
                char::from(ID_ALPHABET[idx])
            })
            .collect()
    }
}
