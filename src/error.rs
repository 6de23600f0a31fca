// src/error.rs

//! Defines `EncodeError`, the error type for the encoding core.
//!
//! Construction-time problems (zone count, alphabet capacity, grid shape)
//! and classification-time problems (value outside the boundary table's
//! domain) are separate variants so callers can tell a misconfigured
//! encoder apart from a rejected sample. I/O-flavoured operations
//! (rendering to a file, graph loading, config loading) use
//! `anyhow::Result` instead and wrap these where needed.

use thiserror::Error;

/// Errors produced by boundary-table construction and classification.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Zone count is zero or odd. The symmetric letter split and the
    /// alternating low/high boundary walk both require an even, positive
    /// number of zones, so anything else is rejected before any boundary
    /// math runs.
    #[error("invalid zone count {0}: must be a positive even number")]
    InvalidZoneCount(usize),

    /// The requested zone count needs more letters than the alphabet has.
    #[error("zone count {zones} exhausts the alphabet: {needed} symbols needed, {available} available")]
    AlphabetExhausted {
        zones: usize,
        needed: usize,
        available: usize,
    },

    /// An equal-population split was requested with fewer samples than
    /// zones, which leaves at least one zone with no sample to anchor a
    /// boundary on.
    #[error("not enough samples ({total}) to split into {zones} equal-population zones")]
    TooFewSamples { total: usize, zones: usize },

    /// The value handed to the classifier lies outside the boundary
    /// table's `[min, max]` domain. Policy is to reject, not clamp.
    #[error("value {value} outside classifier domain [{min}, {max}]")]
    OutOfDomain { value: f64, min: f64, max: f64 },

    /// A surface was constructed with a height count that is not N².
    #[error("surface grid mismatch: side length {n} requires {expected} heights, got {got}")]
    GridMismatch { n: usize, expected: usize, got: usize },

    /// A classifier was built from an empty or unsorted boundary table.
    #[error("malformed boundary table: {0}")]
    MalformedTable(&'static str),
}
