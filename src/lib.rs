//! rowgen Library
//!
//! Generates randomized, partitioned datasets for any nested columnar schema,
//! for property-based testing of data connectors.
//!
//! # Crates
//!
//! - `rowgen_core` - data types, schemas, values and conformance checks
//! - `rowgen_catalog` - representative schema covering every supported type
//! - `rowgen_generator` - random record generation across partitions
//!
//! This crate adds the [`sink`] interface through which generated datasets are
//! handed to a destination, and the `rowgen` command-line tool.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the catalog schema
//! rowgen catalog --format yaml
//!
//! # Generate 1000 records for a schema in at least 4 partitions
//! rowgen generate --schema schema.yaml --rows 1000 --min-partitions 4
//! ```

pub mod sink;

pub use sink::{JsonLinesSink, MemorySink, SaveMode, Sink, SinkError, SinkReport};

pub use rowgen_catalog::Catalog;
pub use rowgen_core::{DataType, Field, Record, Schema, Value};
pub use rowgen_generator::{generate, GeneratorConfig, PartitionedDataset};
