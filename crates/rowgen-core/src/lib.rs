//! Core types for the rowgen dataset generator.
//!
//! This crate provides the foundational types shared by the catalog, the
//! generator and the sinks:
//!
//! - [`DataType`] - Closed type universe a schema can describe
//! - [`Field`] / [`Schema`] - Ordered field definitions, loadable from YAML
//! - [`Value`] / [`Record`] - Positional runtime values
//! - [`temporal`] - Bounded instant/date domain shared by every temporal value
//!
//! # Architecture
//!
//! ```text
//! rowgen-core (this crate)
//!    │
//!    ├─── rowgen-catalog    (derives representative schemas)
//!    │
//!    └─── rowgen-generator  (generates partitioned records for a schema)
//! ```
//!
//! # Example
//!
//! ```rust
//! use rowgen_core::{DataType, Field, Record, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("a", DataType::Int32),
//!     Field::nullable("b", DataType::array(DataType::String, true)),
//! ]);
//!
//! let record = Record::new(vec![Value::Int32(1), Value::Null]);
//! assert!(record.conforms_to(&schema));
//! ```

pub mod json;
pub mod schema;
pub mod temporal;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{Field, Schema, SchemaError};
pub use types::{DataType, MAX_DECIMAL_PRECISION, SYSTEM_DEFAULT_DECIMAL};
pub use values::{format_decimal, Record, Value};
