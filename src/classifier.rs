// src/classifier.rs

//! Defines the `ZonedClassifier`.
//!
//! Built once from an ordered boundary table, it maps a numeric value to
//! the symbol of its containing zone by binary search. The interval
//! convention (see `crate::symbol`) is resolved by the sign of the value:
//! negative values belong to the zone anchored at their lower boundary
//! (`[low, high)`), non-negative values to the zone anchored at their
//! upper boundary (`(low, high]`, closed at an exact-zero boundary).
//!
//! Values outside the table's `[min, max]` domain are rejected with
//! `EncodeError::OutOfDomain` — this classifier never clamps.

use crate::error::EncodeError;
use crate::symbol::BoundaryEntry;

/// Symbol lookup over an ordered boundary table.
#[derive(Debug, Clone)]
pub struct ZonedClassifier {
    entries: Vec<BoundaryEntry>,
}

impl ZonedClassifier {
    /// Builds a classifier from a boundary table sorted ascending by
    /// boundary value. Rejects empty or out-of-order tables.
    pub fn from_table(entries: Vec<BoundaryEntry>) -> Result<Self, EncodeError> {
        if entries.is_empty() {
            return Err(EncodeError::MalformedTable("empty boundary table"));
        }
        if entries
            .windows(2)
            .any(|w| w[1].boundary < w[0].boundary)
        {
            return Err(EncodeError::MalformedTable(
                "boundaries not in ascending order",
            ));
        }
        Ok(ZonedClassifier { entries })
    }

    /// Lowest boundary in the table.
    pub fn min(&self) -> f64 {
        self.entries[0].boundary
    }

    /// Highest boundary in the table.
    pub fn max(&self) -> f64 {
        self.entries[self.entries.len() - 1].boundary
    }

    /// Classifies `value` into the symbol of its containing zone.
    pub fn classify(&self, value: f64) -> Result<char, EncodeError> {
        if value < self.min() || value > self.max() {
            return Err(EncodeError::OutOfDomain {
                value,
                min: self.min(),
                max: self.max(),
            });
        }
        let entry = if value < 0.0 {
            // Negative side: zone [low, high), owned by the entry at low.
            let idx = self.entries.partition_point(|e| e.boundary <= value);
            self.entries[idx - 1]
        } else {
            // Non-negative side: zone (low, high], owned by the entry at
            // high; an exact-zero boundary catches value == 0.
            let idx = self.entries.partition_point(|e| e.boundary < value);
            self.entries[idx]
        };
        Ok(entry.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The 20-zone uniform table over [-100, 100]: j..a on the negative
    // boundaries, A anchored at zero, A..J on the positive boundaries.
    fn uniform_table() -> Vec<BoundaryEntry> {
        let mut t = Vec::new();
        for i in 0..10 {
            let symbol = (b'j' - i as u8) as char;
            t.push(BoundaryEntry::new(symbol, -100.0 + 10.0 * i as f64));
        }
        t.push(BoundaryEntry::new('A', 0.0));
        for i in 0..10 {
            let symbol = (b'A' + i as u8) as char;
            t.push(BoundaryEntry::new(symbol, 10.0 + 10.0 * i as f64));
        }
        t
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = ZonedClassifier::from_table(Vec::new()).unwrap_err();
        assert!(matches!(err, EncodeError::MalformedTable(_)));
    }

    #[test]
    fn test_rejects_unsorted_table() {
        let table = vec![
            BoundaryEntry::new('A', 1.0),
            BoundaryEntry::new('B', 0.5),
        ];
        let err = ZonedClassifier::from_table(table).unwrap_err();
        assert!(matches!(err, EncodeError::MalformedTable(_)));
    }

    #[test]
    fn test_zero_is_closed() {
        let c = ZonedClassifier::from_table(uniform_table()).unwrap();
        assert_eq!(c.classify(0.0).unwrap(), 'A');
    }

    #[test]
    fn test_positive_zones_half_open_high() {
        let c = ZonedClassifier::from_table(uniform_table()).unwrap();
        assert_eq!(c.classify(10.0).unwrap(), 'A'); // (0, 10]
        assert_eq!(c.classify(10.5).unwrap(), 'B'); // (10, 20]
        assert_eq!(c.classify(100.0).unwrap(), 'J');
    }

    #[test]
    fn test_negative_zones_half_open_low() {
        let c = ZonedClassifier::from_table(uniform_table()).unwrap();
        assert_eq!(c.classify(-10.0).unwrap(), 'a'); // [-10, 0)
        assert_eq!(c.classify(-0.5).unwrap(), 'a');
        assert_eq!(c.classify(-95.0).unwrap(), 'j');
        assert_eq!(c.classify(-100.0).unwrap(), 'j');
    }

    #[test]
    fn test_out_of_domain_rejected() {
        let c = ZonedClassifier::from_table(uniform_table()).unwrap();
        for v in [-100.001, 100.001, f64::MAX] {
            let err = c.classify(v).unwrap_err();
            assert!(matches!(err, EncodeError::OutOfDomain { .. }));
        }
    }

    #[test]
    fn test_all_positive_table() {
        // Deviation-style table: magnitudes only, ascending uppercase.
        let table = vec![
            BoundaryEntry::new('A', 0.1),
            BoundaryEntry::new('B', 1.0),
            BoundaryEntry::new('C', 2.0),
        ];
        let c = ZonedClassifier::from_table(table).unwrap();
        assert_eq!(c.classify(0.1).unwrap(), 'A'); // exact minimum
        assert_eq!(c.classify(0.5).unwrap(), 'B'); // (0.1, 1.0]
        assert_eq!(c.classify(1.0).unwrap(), 'B');
        assert_eq!(c.classify(1.5).unwrap(), 'C');
    }
}
