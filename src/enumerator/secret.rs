//! Random target secrets
//!
//! Each trial searches for one secret drawn uniformly from the space of
//! `length`-symbol strings over the alphabet. The generator owns its own PRNG
//! instance (xoshiro256++) instead of touching a process-wide source, so a
//! benchmark run seeded with `with_seed` is reproducible.
//!
//! # Example
//!
//! ```
//! use crackbench::enumerator::{Alphabet, secret::SecretGenerator};
//!
//! let alphabet = Alphabet::new("ABCD").unwrap();
//! let mut generator = SecretGenerator::with_seed(7);
//! let secret = generator.generate(&alphabet, 3);
//! assert_eq!(secret.chars().count(), 3);
//! assert!(alphabet.contains_all(&secret));
//! ```

use super::Alphabet;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random secret generator
pub struct SecretGenerator {
    rng: Xoshiro256PlusPlus,
}

impl SecretGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed
    ///
    /// Useful for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Create a seeded generator if `seed` is set, entropy-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate a secret of `length` symbols, each chosen independently
    pub fn generate(&mut self, alphabet: &Alphabet, length: usize) -> String {
        (0..length)
            .map(|_| alphabet.symbol(self.rng.gen_range(0..alphabet.len())))
            .collect()
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}
