// src/symbol.rs

//! Defines the symbol-table records: `BoundaryEntry` (one letter per zone
//! boundary) and `TextPoint` (one letter per classified surface point),
//! plus the alphabet helpers shared by the partition strategies.
//!
//! Interval convention carried by a boundary table: a positive-side zone
//! is `(low, high]` and is owned by the entry sitting at `high`; a
//! negative-side zone is `[low, high)` and is owned by the entry at `low`;
//! the zone containing zero is closed on both ends.

use crate::error::EncodeError;

/// Number of letters available per case.
pub const ALPHABET_LEN: usize = 26;

/// One row of a boundary table: a zone symbol and the boundary value the
/// symbol is anchored to (see the module docs for which side it owns).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEntry {
    /// The letter assigned to the zone this entry owns.
    pub symbol: char,
    /// The boundary value the symbol is anchored to.
    pub boundary: f64,
}

impl BoundaryEntry {
    pub fn new(symbol: char, boundary: f64) -> Self {
        BoundaryEntry { symbol, boundary }
    }
}

/// One classified surface point: the sample's original scan index and the
/// symbol of the zone its measured value fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPoint {
    /// Index of the sample in the surface's natural scan order.
    pub index: usize,
    /// The letter assigned by the classifier.
    pub symbol: char,
}

/// Returns `count` uppercase letters ascending from `'A'`.
///
/// Used by the equal-population strategies, which letter their boundary
/// arrays in index order regardless of sign.
pub fn ascending_uppercase(count: usize) -> Result<Vec<char>, EncodeError> {
    if count > ALPHABET_LEN {
        return Err(EncodeError::AlphabetExhausted {
            zones: count.saturating_sub(1),
            needed: count,
            available: ALPHABET_LEN,
        });
    }
    Ok((0..count).map(|i| (b'A' + i as u8) as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_uppercase() {
        let letters = ascending_uppercase(4).unwrap();
        assert_eq!(letters, vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn test_ascending_uppercase_full_alphabet() {
        let letters = ascending_uppercase(26).unwrap();
        assert_eq!(letters.first(), Some(&'A'));
        assert_eq!(letters.last(), Some(&'Z'));
    }

    #[test]
    fn test_ascending_uppercase_exhausted() {
        let err = ascending_uppercase(27).unwrap_err();
        assert!(matches!(err, EncodeError::AlphabetExhausted { .. }));
    }
}
