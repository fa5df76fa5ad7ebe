//! Candidate enumeration
//!
//! This module maps candidate indices to candidate strings over a fixed
//! alphabet. The mapping is a mixed-radix decoding with base `B = |alphabet|`,
//! least-significant digit first: symbol `i` of the output is digit `i` of the
//! base-`B` representation of the index.
//!
//! For a given length `L` the mapping is a bijection between `[0, B^L)` and the
//! set of all strings of `L` symbols, which is what lets the partitioner split
//! the search space into plain integer ranges.
//!
//! # Example
//!
//! ```
//! use crackbench::enumerator::Alphabet;
//!
//! let alphabet = Alphabet::new("ABCD").unwrap();
//! assert_eq!(alphabet.space_size(2).unwrap(), 16);
//!
//! // 10 = 2 + 2*4 -> digits [2, 2] -> "CC"
//! let candidate = alphabet.decode(10, 2);
//! assert_eq!(candidate, "CC");
//! assert_eq!(alphabet.encode(&candidate), Some(10));
//! ```

pub mod secret;

use crate::error::{SearchError, SearchResult};
use std::collections::HashMap;
use std::fmt;

/// Default symbol set: lowercase, uppercase, digits, then ASCII punctuation
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Ordered, immutable set of distinct symbols
///
/// The alphabet's size is the enumeration base. Symbols are stored as `char`s
/// so multi-byte symbols are supported; candidate strings are still compared
/// as plain UTF-8 strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    /// Symbol to digit, for encoding and membership checks
    digits: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from a string of distinct symbols
    ///
    /// # Errors
    ///
    /// Returns `EmptyAlphabet` for an empty string and `DuplicateSymbol` if any
    /// symbol appears twice (duplicates would break the bijection).
    pub fn new(symbols: &str) -> SearchResult<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(SearchError::EmptyAlphabet);
        }

        let mut digits = HashMap::with_capacity(symbols.len());
        for (digit, &c) in symbols.iter().enumerate() {
            if digits.insert(c, digit).is_some() {
                return Err(SearchError::DuplicateSymbol(c));
            }
        }

        Ok(Self { symbols, digits })
    }

    /// Number of symbols (the enumeration base)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `digit`
    #[inline]
    pub fn symbol(&self, digit: usize) -> char {
        self.symbols[digit]
    }

    /// Position of `symbol` in the alphabet
    #[inline]
    pub fn digit_of(&self, symbol: char) -> Option<usize> {
        self.digits.get(&symbol).copied()
    }

    /// Total number of candidates of `length` symbols (`B^length`)
    ///
    /// # Example
    ///
    /// ```
    /// use crackbench::enumerator::Alphabet;
    ///
    /// let alphabet = Alphabet::default();
    /// assert_eq!(alphabet.space_size(2).unwrap(), 8836);
    /// assert!(alphabet.space_size(20).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` for a zero length and `SpaceTooLarge` when the
    /// space does not fit in a `u128`.
    pub fn space_size(&self, length: usize) -> SearchResult<u128> {
        if length == 0 {
            return Err(SearchError::InvalidLength(length));
        }

        let too_large = SearchError::SpaceTooLarge {
            base: self.len(),
            length,
        };
        let exponent = u32::try_from(length).map_err(|_| too_large.clone())?;
        (self.len() as u128).checked_pow(exponent).ok_or(too_large)
    }

    /// Decode `index` into a candidate of `length` symbols
    ///
    /// Indices outside `[0, B^length)` wrap around; callers only pass indices
    /// produced by the partitioner.
    pub fn decode(&self, index: u128, length: usize) -> String {
        let mut candidate = String::with_capacity(length);
        self.decode_into(index, length, &mut candidate);
        candidate
    }

    /// Decode `index` into `buf`, reusing its allocation
    ///
    /// `buf` is cleared first. This is the hot path for workers, which decode
    /// once per candidate.
    #[inline]
    pub fn decode_into(&self, mut index: u128, length: usize, buf: &mut String) {
        buf.clear();
        let base = self.len() as u128;
        for _ in 0..length {
            buf.push(self.symbols[(index % base) as usize]);
            index /= base;
        }
    }

    /// Inverse of [`decode`](Self::decode)
    ///
    /// Returns `None` if the candidate contains a symbol outside the alphabet
    /// or is too long for its index to fit in a `u128`.
    pub fn encode(&self, candidate: &str) -> Option<u128> {
        let base = self.len() as u128;
        let mut index = 0u128;
        for symbol in candidate.chars().rev() {
            let digit = self.digit_of(symbol)? as u128;
            index = index.checked_mul(base)?.checked_add(digit)?;
        }
        Some(index)
    }

    /// True if every symbol of `candidate` belongs to the alphabet
    pub fn contains_all(&self, candidate: &str) -> bool {
        candidate.chars().all(|c| self.digits.contains_key(&c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let digits = symbols.iter().enumerate().map(|(digit, &c)| (c, digit)).collect();
        Self { symbols, digits }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 94);
        assert_eq!(alphabet.symbol(0), 'a');
        assert_eq!(alphabet.symbol(93), '~');
        assert_eq!(Alphabet::new(DEFAULT_ALPHABET).unwrap(), alphabet);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(Alphabet::new(""), Err(SearchError::EmptyAlphabet));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        assert_eq!(Alphabet::new("ABCA"), Err(SearchError::DuplicateSymbol('A')));
        assert_eq!(Alphabet::new("xyzz"), Err(SearchError::DuplicateSymbol('z')));
    }

    #[test]
    fn test_large_alphabet_digits() {
        // Every char from U+0100 upward, 5000 distinct symbols
        let symbols: String = (0x100u32..0x100 + 5000).filter_map(char::from_u32).collect();
        let alphabet = Alphabet::new(&symbols).unwrap();

        assert_eq!(alphabet.len(), 5000);
        for (digit, c) in symbols.chars().enumerate() {
            assert_eq!(alphabet.digit_of(c), Some(digit));
        }
        assert_eq!(alphabet.digit_of('a'), None);

        let mut with_dup = symbols.clone();
        with_dup.push('\u{1000}');
        assert_eq!(Alphabet::new(&with_dup), Err(SearchError::DuplicateSymbol('\u{1000}')));
    }

    #[test]
    fn test_decode_least_significant_first() {
        let alphabet = Alphabet::new("ABCD").unwrap();
        assert_eq!(alphabet.decode(0, 2), "AA");
        assert_eq!(alphabet.decode(1, 2), "BA");
        assert_eq!(alphabet.decode(4, 2), "AB");
        assert_eq!(alphabet.decode(10, 2), "CC");
        assert_eq!(alphabet.decode(15, 2), "DD");
    }

    #[test]
    fn test_decode_wraps_out_of_range() {
        let alphabet = Alphabet::new("ABCD").unwrap();
        // 16 = 0 + 0*4 + 1*16, only two digits are emitted
        assert_eq!(alphabet.decode(16, 2), "AA");
    }

    #[test]
    fn test_round_trip_full_space() {
        let alphabet = Alphabet::new("xyz01").unwrap();
        for length in 1..=4 {
            let total = alphabet.space_size(length).unwrap();
            let mut seen = HashSet::new();
            for index in 0..total {
                let candidate = alphabet.decode(index, length);
                assert_eq!(candidate.chars().count(), length);
                assert_eq!(alphabet.encode(&candidate), Some(index));
                assert!(seen.insert(candidate), "duplicate candidate for index {}", index);
            }
            assert_eq!(seen.len() as u128, total);
        }
    }

    #[test]
    fn test_round_trip_default_alphabet_sampled() {
        let alphabet = Alphabet::default();
        let total = alphabet.space_size(6).unwrap();
        for index in (0..total).step_by(7_919_993) {
            assert_eq!(alphabet.encode(&alphabet.decode(index, 6)), Some(index));
        }
        assert_eq!(alphabet.encode(&alphabet.decode(total - 1, 6)), Some(total - 1));
    }

    #[test]
    fn test_decode_into_reuses_buffer() {
        let alphabet = Alphabet::new("ABCD").unwrap();
        let mut buf = String::from("leftover");
        alphabet.decode_into(7, 3, &mut buf);
        assert_eq!(buf, "DBA");
    }

    #[test]
    fn test_multibyte_symbols() {
        let alphabet = Alphabet::new("αβγ").unwrap();
        let candidate = alphabet.decode(5, 2);
        assert_eq!(candidate, "γβ");
        assert_eq!(alphabet.encode(&candidate), Some(5));
    }

    #[test]
    fn test_encode_foreign_symbol() {
        let alphabet = Alphabet::new("ABCD").unwrap();
        assert_eq!(alphabet.encode("AZ"), None);
        assert!(!alphabet.contains_all("AZ"));
        assert!(alphabet.contains_all("DCBA"));
    }

    #[test]
    fn test_space_size() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.space_size(1).unwrap(), 94);
        assert_eq!(alphabet.space_size(3).unwrap(), 94 * 94 * 94);
        assert_eq!(alphabet.space_size(0), Err(SearchError::InvalidLength(0)));
    }

    #[test]
    fn test_space_size_overflow() {
        let alphabet = Alphabet::default();
        // 94^19 < 2^128 < 94^20
        assert!(alphabet.space_size(19).is_ok());
        assert_eq!(
            alphabet.space_size(20),
            Err(SearchError::SpaceTooLarge { base: 94, length: 20 })
        );
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let alphabet = Alphabet::new("Z").unwrap();
        assert_eq!(alphabet.space_size(5).unwrap(), 1);
        assert_eq!(alphabet.decode(0, 5), "ZZZZZ");
    }

    #[test]
    fn test_display() {
        let alphabet = Alphabet::new("AbC").unwrap();
        assert_eq!(alphabet.to_string(), "AbC");
    }
}
