// src/lib.rs

//! # surftext
//!
//! Converts a grid of measured surface heights (e.g. a nanoscale
//! topography scan) into a symbolic character sequence, so text-analytics
//! techniques such as n-gram-graph similarity can be applied to compare
//! surfaces.
//!
//! The pipeline: a [`PartitionStrategy`] computes a boundary table from a
//! [`Surface`] snapshot and a zone count; a [`ZonedClassifier`] built
//! from the table assigns every sample the letter of its containing
//! zone; the resulting [`Encoder`] text renders as an N×N character grid
//! or lifts into an [`NGramGraph`].
//!
//! ```
//! use surftext::{Encoder, PartitionStrategy, Surface};
//!
//! let surface = Surface::new(2, 1.0, 0.5, 0.5, vec![-95.0, 0.0, 15.0, -10.0]).unwrap();
//! let mut encoder = Encoder::new(PartitionStrategy::UniformWidth, 20, &surface).unwrap();
//! encoder.classify().unwrap();
//! assert_eq!(encoder.render(), "jA\nBa\n\n");
//! ```

pub mod classifier;
pub mod config;
pub mod encoder;
pub mod error;
pub mod linspace;
pub mod ngram;
pub mod partition;
pub mod surface;
pub mod symbol;

pub use classifier::ZonedClassifier;
pub use config::EncoderConfig;
pub use encoder::Encoder;
pub use error::EncodeError;
pub use ngram::NGramGraph;
pub use partition::PartitionStrategy;
pub use surface::{SamplePoint, Surface};
pub use symbol::{BoundaryEntry, TextPoint};
