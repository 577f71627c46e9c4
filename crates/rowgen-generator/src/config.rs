//! Generator configuration.

use crate::error::{ConfigError, GeneratorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default total number of records across all partitions.
pub const DEFAULT_ROWS: u64 = 100;

/// Default upper bound on array, map, string and binary lengths.
pub const DEFAULT_MAX_COLLECTION_LEN: usize = 8;

/// Default probability that a nullable slot is null.
pub const DEFAULT_NULL_PROBABILITY: f64 = 0.1;

/// Settings shared by every generator of a generation run.
///
/// # YAML Format
///
/// ```yaml
/// seed: 7
/// rows: 1000
/// max_collection_len: 4
/// null_probability: 0.25
/// ```
///
/// Every key is optional and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the per-partition random streams (same seed = same data)
    pub seed: u64,

    /// Total number of records, summed across partitions
    pub rows: u64,

    /// Inclusive upper bound on generated collection, string and binary lengths
    pub max_collection_len: usize,

    /// Probability that a nullable field, array element or map value is null
    pub null_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROWS,
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
            null_probability: DEFAULT_NULL_PROBABILITY,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the total number of records.
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.rows = rows;
        self
    }

    /// Set the collection length bound.
    pub fn with_max_collection_len(mut self, max_collection_len: usize) -> Self {
        self.max_collection_len = max_collection_len;
        self
    }

    /// Set the null probability.
    pub fn with_null_probability(mut self, null_probability: f64) -> Self {
        self.null_probability = null_probability;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.sizing().validate()
    }

    /// The sizing knobs generators capture when they are built.
    pub fn sizing(&self) -> Sizing {
        Sizing {
            max_len: self.max_collection_len,
            null_probability: self.null_probability,
        }
    }
}

/// Length and null-frequency bounds captured by composite generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    /// Inclusive upper bound on collection, string and binary lengths
    pub max_len: usize,
    /// Probability that a nullable slot is null
    pub null_probability: f64,
}

impl Sizing {
    /// Reject a null probability outside `[0, 1]`, NaN included.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(0.0..=1.0).contains(&self.null_probability) {
            return Err(GeneratorError::InvalidConfig(format!(
                "null_probability must be within [0, 1], got {}",
                self.null_probability
            )));
        }
        Ok(())
    }
}

impl Default for Sizing {
    fn default() -> Self {
        GeneratorConfig::default().sizing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.max_collection_len, DEFAULT_MAX_COLLECTION_LEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GeneratorConfig::from_yaml("rows: 5\nnull_probability: 0.5\n").unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.null_probability, 0.5);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.max_collection_len, DEFAULT_MAX_COLLECTION_LEN);
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::default()
            .with_seed(1)
            .with_rows(2)
            .with_max_collection_len(3)
            .with_null_probability(0.0);
        assert_eq!(
            config.sizing(),
            Sizing {
                max_len: 3,
                null_probability: 0.0
            }
        );
        assert_eq!((config.seed, config.rows), (1, 2));
    }

    #[test]
    fn test_invalid_null_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = GeneratorConfig::default().with_null_probability(p);
            assert!(matches!(
                config.validate(),
                Err(GeneratorError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_sizing_bounds() {
        let mut sizing = Sizing::default();
        for p in [0.0, 0.5, 1.0] {
            sizing.null_probability = p;
            assert!(sizing.validate().is_ok());
        }
        for p in [-1.0, 2.0, f64::NAN, f64::INFINITY] {
            sizing.null_probability = p;
            assert!(matches!(
                sizing.validate(),
                Err(GeneratorError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_bad_value_fails() {
        assert!(GeneratorConfig::from_yaml("rows: lots\n").is_err());
    }
}
