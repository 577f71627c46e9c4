//! Error types for record generation.

use thiserror::Error;

/// Errors that can occur while building generators or generating a dataset.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A schema field has a type no generator is registered for.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Generator configuration is out of range.
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// Error reading or parsing a configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A partition worker failed to complete.
    #[error("Partition worker failed: {0}")]
    Worker(String),
}

/// Errors loading a generator configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
