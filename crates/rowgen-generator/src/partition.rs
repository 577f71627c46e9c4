//! Work partitioning for dataset generation.
//!
//! A [`PartitionPlan`] splits the requested number of records across
//! partitions. Each partition becomes one [`PartitionTask`] that owns a
//! shared handle to the generator and its own seed, so tasks can run on any
//! worker in any order.

use crate::generator::{stream_seed, RecordIterator, RowGenerator};
use rowgen_core::Record;
use std::sync::Arc;

/// Upper bound on the number of partitions in one plan.
pub const MAX_PARTITIONS: usize = 65_536;

/// Per-partition record counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    sizes: Vec<u64>,
}

impl PartitionPlan {
    /// Split `rows` across `min_partitions` partitions, clamped to
    /// `1..=MAX_PARTITIONS`.
    ///
    /// Sizes differ by at most one; the first `rows % n` partitions get the
    /// extra record.
    pub fn new(rows: u64, min_partitions: usize) -> Self {
        let count = min_partitions.clamp(1, MAX_PARTITIONS);
        let base = rows / count as u64;
        let extra = (rows % count as u64) as usize;

        let sizes = (0..count)
            .map(|i| if i < extra { base + 1 } else { base })
            .collect();
        Self { sizes }
    }

    /// Number of partitions in the plan.
    pub fn num_partitions(&self) -> usize {
        self.sizes.len()
    }

    /// Record count of each partition, in partition order.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Total records across all partitions.
    pub fn total_rows(&self) -> u64 {
        self.sizes.iter().sum()
    }

    /// One task per partition, seeded from `base_seed`.
    pub fn tasks(&self, generator: &Arc<RowGenerator>, base_seed: u64) -> Vec<PartitionTask> {
        self.sizes
            .iter()
            .enumerate()
            .map(|(index, rows)| PartitionTask {
                index,
                seed: stream_seed(base_seed, index as u64),
                rows: *rows,
                generator: Arc::clone(generator),
            })
            .collect()
    }

    /// Describe the plan for logging.
    pub fn describe(&self) -> String {
        let mut lines = Vec::with_capacity(self.sizes.len() + 1);
        lines.push(format!(
            "Partition plan: {} records in {} partitions",
            self.total_rows(),
            self.num_partitions()
        ));
        for (index, rows) in self.sizes.iter().enumerate() {
            lines.push(format!("  partition-{index}: {rows} records"));
        }
        lines.join("\n")
    }
}

/// Generation work for a single partition.
#[derive(Debug, Clone)]
pub struct PartitionTask {
    index: usize,
    seed: u64,
    rows: u64,
    generator: Arc<RowGenerator>,
}

impl PartitionTask {
    /// Partition number.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Seed of this partition's random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of records this task yields.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Lazily yield this partition's records.
    pub fn records(&self) -> RecordIterator<'_> {
        self.generator.records(self.seed, self.rows)
    }

    /// Generate every record of the partition.
    pub fn run(self) -> Partition {
        let records = self.records().collect();
        Partition {
            index: self.index,
            records,
        }
    }
}

/// A generated partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    index: usize,
    records: Vec<Record>,
}

impl Partition {
    /// Create a partition from already generated records.
    pub fn new(index: usize, records: Vec<Record>) -> Self {
        Self { index, records }
    }

    /// Partition number.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Records of this partition.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the partition holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take ownership of the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use rowgen_core::{DataType, Field, Schema};

    fn generator() -> Arc<RowGenerator> {
        let schema = Schema::new(vec![Field::new("a", DataType::Int32)]);
        Arc::new(RowGenerator::new(schema, &GeneratorConfig::default()).unwrap())
    }

    #[test]
    fn test_plan_even_split() {
        let plan = PartitionPlan::new(100, 4);
        assert_eq!(plan.sizes(), &[25, 25, 25, 25]);
        assert_eq!(plan.total_rows(), 100);
    }

    #[test]
    fn test_plan_uneven_split() {
        let plan = PartitionPlan::new(10, 4);
        assert_eq!(plan.sizes(), &[3, 3, 2, 2]);
        assert_eq!(plan.total_rows(), 10);
    }

    #[test]
    fn test_plan_more_partitions_than_rows() {
        let plan = PartitionPlan::new(2, 5);
        assert_eq!(plan.num_partitions(), 5);
        assert_eq!(plan.sizes(), &[1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_plan_zero_partitions_means_one() {
        let plan = PartitionPlan::new(7, 0);
        assert_eq!(plan.sizes(), &[7]);
    }

    #[test]
    fn test_plan_partition_count_is_capped() {
        let plan = PartitionPlan::new(10, usize::MAX);
        assert_eq!(plan.num_partitions(), MAX_PARTITIONS);
        assert_eq!(plan.total_rows(), 10);
    }

    #[test]
    fn test_plan_zero_rows() {
        let plan = PartitionPlan::new(0, 3);
        assert_eq!(plan.sizes(), &[0, 0, 0]);
    }

    #[test]
    fn test_tasks_have_distinct_seeds() {
        let plan = PartitionPlan::new(12, 3);
        let tasks = plan.tasks(&generator(), 42);

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].seed(), 42);
        assert_ne!(tasks[1].seed(), tasks[2].seed());
        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.index(), i);
            assert_eq!(task.rows(), 4);
            assert_eq!(task.records().len(), 4);
        }
    }

    #[test]
    fn test_task_run_is_reproducible() {
        let plan = PartitionPlan::new(6, 2);
        let row_generator = generator();

        let first = plan.tasks(&row_generator, 9).remove(1).run();
        let second = plan.tasks(&row_generator, 9).remove(1).run();

        assert_eq!(first.index(), 1);
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_describe() {
        let text = PartitionPlan::new(5, 2).describe();
        assert!(text.contains("5 records in 2 partitions"));
        assert!(text.contains("partition-0: 3 records"));
        assert!(text.contains("partition-1: 2 records"));
    }
}
