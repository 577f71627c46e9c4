//! Error types for catalog construction.

use thiserror::Error;

/// Errors that can occur while building the field catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A registry entry has no rule for deriving a field name.
    #[error("No naming rule for type '{0}'")]
    MissingNamingRule(String),

    /// Two distinct catalog entries derive the same field name.
    #[error("Naming collision: '{name}' is derived by both {first} and {second}")]
    NamingCollision {
        name: String,
        first: String,
        second: String,
    },
}
