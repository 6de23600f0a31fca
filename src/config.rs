// src/config.rs

//! Defines the configuration structure for building encoders.
//!
//! This is the only persisted-configuration surface of the crate: a small
//! serde-deserializable record naming the partition strategy, the zone
//! count, and an optional rms rescale exponent applied before the first
//! classification pass. Defaults match the simple uniform encoding.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::encoder::Encoder;
use crate::error::EncodeError;
use crate::partition::PartitionStrategy;
use crate::surface::Surface;

/// Encoder construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Which boundary-table strategy to bind.
    pub strategy: PartitionStrategy,
    /// Number of zones to split the value range into (positive, even).
    pub zones: usize,
    /// Optional power-of-ten rms rescale applied to the surface before
    /// classification (`rms *= 10^exp`, heights follow).
    pub rescale_exponent: Option<i32>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            strategy: PartitionStrategy::UniformWidth,
            zones: 20, // one letter per 10 report units over [-100, 100]
            rescale_exponent: None,
        }
    }
}

impl EncoderConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Builds an encoder for `surface` from these parameters, applying
    /// the rescale exponent (if any) before the boundary table is
    /// computed.
    pub fn build_encoder(&self, surface: &Surface) -> Result<Encoder, EncodeError> {
        let mut surface = surface.clone();
        if let Some(exp) = self.rescale_exponent {
            let new_rms = surface.rms() * 10f64.powi(exp);
            surface.rescale(new_rms);
        }
        Encoder::new(self.strategy, self.zones, &surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EncoderConfig::default();
        assert_eq!(cfg.strategy, PartitionStrategy::UniformWidth);
        assert_eq!(cfg.zones, 20);
        assert!(cfg.rescale_exponent.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = EncoderConfig {
            strategy: PartitionStrategy::EqualPopulationDeviation,
            zones: 8,
            rescale_exponent: Some(-1),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EncoderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.strategy, cfg.strategy);
        assert_eq!(back.zones, cfg.zones);
        assert_eq!(back.rescale_exponent, cfg.rescale_exponent);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: EncoderConfig =
            serde_json::from_str(r#"{ "strategy": "equal_population_height" }"#).unwrap();
        assert_eq!(cfg.strategy, PartitionStrategy::EqualPopulationHeight);
        assert_eq!(cfg.zones, 20);
    }

    #[test]
    fn test_build_encoder_applies_rescale() {
        let surface = Surface::new(2, 1.0, 0.0, 0.0, vec![0.5, -0.5, 0.25, -0.25]).unwrap();
        let cfg = EncoderConfig {
            strategy: PartitionStrategy::UniformWidth,
            zones: 20,
            rescale_exponent: Some(2),
        };
        let enc = cfg.build_encoder(&surface).unwrap();
        assert_eq!(enc.surface().rms(), 100.0);
        assert_eq!(enc.surface().points()[0].height, 50.0);
    }

    #[test]
    fn test_build_encoder_rejects_bad_zones() {
        let surface = Surface::new(1, 1.0, 0.0, 0.0, vec![0.0]).unwrap();
        let cfg = EncoderConfig {
            zones: 3,
            ..EncoderConfig::default()
        };
        assert!(matches!(
            cfg.build_encoder(&surface).unwrap_err(),
            EncodeError::InvalidZoneCount(3)
        ));
    }
}
