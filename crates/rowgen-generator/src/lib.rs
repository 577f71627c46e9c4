//! Schema-driven random record generation.
//!
//! This crate turns any [`rowgen_core::Schema`] into a partitioned dataset of
//! random records that conform to it.
//!
//! # Architecture
//!
//! - [`FieldGenerator`] - generator tree for one data type, built once per field
//! - [`RowGenerator`] - whole-record generator for a schema
//! - [`PartitionPlan`] / [`PartitionTask`] - split the sample across partitions
//! - [`generate`] - run one worker per partition and collect a [`PartitionedDataset`]
//!
//! # Example
//!
//! ```rust,no_run
//! use rowgen_core::{DataType, Field, Schema};
//! use rowgen_generator::{generate, GeneratorConfig};
//!
//! # async fn example() -> Result<(), rowgen_generator::GeneratorError> {
//! let schema = Schema::new(vec![
//!     Field::new("a", DataType::Int32),
//!     Field::nullable("b", DataType::array(DataType::String, true)),
//! ]);
//!
//! let config = GeneratorConfig::default().with_rows(1000).with_seed(7);
//! let dataset = generate(schema, 4, &config).await?;
//!
//! assert!(dataset.num_partitions() >= 4);
//! assert_eq!(dataset.len(), 1000);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod generators;
pub mod partition;

pub use config::{GeneratorConfig, Sizing};
pub use dataset::{generate, generate_blocking, PartitionedDataset};
pub use error::{ConfigError, GeneratorError};
pub use generator::{stream_seed, RecordIterator, RowGenerator};
pub use generators::{FieldGenerator, ValueGenerator};
pub use partition::{Partition, PartitionPlan, PartitionTask, MAX_PARTITIONS};
