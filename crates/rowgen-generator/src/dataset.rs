//! Partitioned dataset generation.

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generator::RowGenerator;
use crate::partition::{Partition, PartitionPlan, PartitionTask, MAX_PARTITIONS};
use futures::future::try_join_all;
use rowgen_core::{Record, Schema};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Immutable result of a generation run: a schema and its partitions.
///
/// Concatenating the partitions in order yields the complete dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedDataset {
    schema: Schema,
    partitions: Vec<Partition>,
}

impl PartitionedDataset {
    /// Assemble a dataset from a schema and partitions.
    ///
    /// Records are not checked against the schema; sinks do that.
    pub fn from_parts(schema: Schema, partitions: Vec<Partition>) -> Self {
        Self { schema, partitions }
    }

    /// Schema every record conforms to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Partitions in partition order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Total records across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(Partition::is_empty)
    }

    /// Every record, partition by partition.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.partitions.iter().flat_map(|p| p.records().iter())
    }

    /// Split into the schema and the partitions.
    pub fn into_partitions(self) -> (Schema, Vec<Partition>) {
        (self.schema, self.partitions)
    }
}

fn prepare(
    schema: Schema,
    min_partitions: usize,
    config: &GeneratorConfig,
) -> Result<(PartitionPlan, Vec<PartitionTask>), GeneratorError> {
    if min_partitions > MAX_PARTITIONS {
        return Err(GeneratorError::InvalidConfig(format!(
            "min_partitions must be at most {MAX_PARTITIONS}, got {min_partitions}"
        )));
    }
    let generator = Arc::new(RowGenerator::new(schema, config)?);
    let plan = PartitionPlan::new(config.rows, min_partitions);
    debug!("{}", plan.describe());
    let tasks = plan.tasks(&generator, config.seed);
    Ok((plan, tasks))
}

/// Generate `config.rows` records for `schema` in at least `min_partitions`
/// partitions, one blocking worker per partition.
///
/// Unsupported types, invalid configuration and a `min_partitions` above
/// [`MAX_PARTITIONS`] fail before any worker is spawned.
pub async fn generate(
    schema: Schema,
    min_partitions: usize,
    config: &GeneratorConfig,
) -> Result<PartitionedDataset, GeneratorError> {
    let start = Instant::now();
    let (plan, tasks) = prepare(schema.clone(), min_partitions, config)?;

    info!(
        "Generating {} records across {} partitions (seed={})",
        plan.total_rows(),
        plan.num_partitions(),
        config.seed
    );

    let handles = tasks.into_iter().map(|task| {
        let index = task.index();
        async move {
            tokio::task::spawn_blocking(move || task.run())
                .await
                .map_err(|e| GeneratorError::Worker(format!("partition {index}: {e}")))
        }
    });
    let partitions = try_join_all(handles).await?;

    let dataset = PartitionedDataset { schema, partitions };
    info!(
        "Generated {} records in {} partitions in {:?}",
        dataset.len(),
        dataset.num_partitions(),
        start.elapsed()
    );
    Ok(dataset)
}

/// Same as [`generate`], running every partition on the calling thread.
pub fn generate_blocking(
    schema: Schema,
    min_partitions: usize,
    config: &GeneratorConfig,
) -> Result<PartitionedDataset, GeneratorError> {
    let (_, tasks) = prepare(schema.clone(), min_partitions, config)?;
    let partitions = tasks.into_iter().map(PartitionTask::run).collect();
    Ok(PartitionedDataset { schema, partitions })
}
