//! Sinks that accept a generated dataset under a write policy.
//!
//! A sink receives the schema and partitioned records together with a
//! [`SaveMode`]. Every sink checks that each record positionally matches the
//! schema before writing anything; what a save mode means is up to the sink.

use clap::ValueEnum;
use rowgen_generator::PartitionedDataset;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Write policy applied when the sink already holds data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Add the records after any existing data
    #[default]
    Append,
    /// Replace existing data with the records
    Overwrite,
    /// Fail if the sink already holds data
    ErrorIfExists,
    /// Leave existing data untouched and write nothing
    Ignore,
}

/// Errors that can occur while writing a dataset.
#[derive(Error, Debug)]
pub enum SinkError {
    /// A record does not match the dataset schema.
    #[error("Record {record} of partition {partition} does not conform to the schema")]
    NonConforming { partition: usize, record: usize },

    /// The sink already holds data and the mode is `ErrorIfExists`.
    #[error("Sink already contains data")]
    AlreadyExists,

    /// The sink cannot honour the requested mode in its current state.
    #[error("Save mode {0:?} is not supported by this sink in its current state")]
    UnsupportedMode(SaveMode),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a [`Sink::write`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinkReport {
    /// Number of records written.
    pub records_written: u64,
    /// Number of partitions written.
    pub partitions_written: usize,
    /// Whether the write was skipped because of [`SaveMode::Ignore`].
    pub skipped: bool,
    /// Time spent writing.
    pub duration: Duration,
}

impl SinkReport {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

/// A destination for generated datasets.
pub trait Sink {
    /// Write `dataset` under `mode`.
    fn write(
        &mut self,
        dataset: &PartitionedDataset,
        mode: SaveMode,
    ) -> Result<SinkReport, SinkError>;
}

/// Check that every record matches the dataset schema.
pub fn check_conformance(dataset: &PartitionedDataset) -> Result<(), SinkError> {
    for partition in dataset.partitions() {
        for (record, values) in partition.records().iter().enumerate() {
            if !values.conforms_to(dataset.schema()) {
                return Err(SinkError::NonConforming {
                    partition: partition.index(),
                    record,
                });
            }
        }
    }
    Ok(())
}

// ============================================================================
// JSON lines
// ============================================================================

/// Writes one JSON object per record to any writer.
///
/// Each line has the shape `{"partition": <index>, "record": {...}}`. Lines
/// already written cannot be retracted, so `Overwrite` is only accepted while
/// the sink is still empty.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    records_written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Total records written over the sink's lifetime.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Whether anything has been written yet.
    pub fn has_data(&self) -> bool {
        self.records_written > 0
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn write(
        &mut self,
        dataset: &PartitionedDataset,
        mode: SaveMode,
    ) -> Result<SinkReport, SinkError> {
        match mode {
            SaveMode::Append => {}
            SaveMode::Overwrite if self.has_data() => {
                return Err(SinkError::UnsupportedMode(mode));
            }
            SaveMode::Overwrite => {}
            SaveMode::ErrorIfExists if self.has_data() => return Err(SinkError::AlreadyExists),
            SaveMode::ErrorIfExists => {}
            SaveMode::Ignore if self.has_data() => {
                debug!("Sink already holds data, ignoring write");
                return Ok(SinkReport::skipped());
            }
            SaveMode::Ignore => {}
        }

        check_conformance(dataset)?;

        let start = Instant::now();
        let mut records_written = 0u64;
        for partition in dataset.partitions() {
            for record in partition.records() {
                let line = serde_json::json!({
                    "partition": partition.index(),
                    "record": record.to_json(dataset.schema()),
                });
                serde_json::to_writer(&mut self.writer, &line)?;
                writeln!(self.writer)?;
                records_written += 1;
            }
        }
        self.writer.flush()?;
        self.records_written += records_written;

        let report = SinkReport {
            records_written,
            partitions_written: dataset.num_partitions(),
            skipped: false,
            duration: start.elapsed(),
        };
        info!(
            "Wrote {} records from {} partitions ({:.0} records/sec)",
            report.records_written,
            report.partitions_written,
            report.records_per_second()
        );
        Ok(report)
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Keeps written datasets in memory, honouring every save mode.
#[derive(Debug, Default)]
pub struct MemorySink {
    datasets: Vec<PartitionedDataset>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Datasets currently held, oldest first.
    pub fn datasets(&self) -> &[PartitionedDataset] {
        &self.datasets
    }

    /// Total records currently held.
    pub fn len(&self) -> usize {
        self.datasets.iter().map(PartitionedDataset::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write(
        &mut self,
        dataset: &PartitionedDataset,
        mode: SaveMode,
    ) -> Result<SinkReport, SinkError> {
        let has_data = !self.is_empty();
        match mode {
            SaveMode::ErrorIfExists if has_data => return Err(SinkError::AlreadyExists),
            SaveMode::Ignore if has_data => return Ok(SinkReport::skipped()),
            _ => {}
        }

        check_conformance(dataset)?;

        let start = Instant::now();
        if mode == SaveMode::Overwrite {
            self.datasets.clear();
        }
        self.datasets.push(dataset.clone());

        Ok(SinkReport {
            records_written: dataset.len() as u64,
            partitions_written: dataset.num_partitions(),
            skipped: false,
            duration: start.elapsed(),
        })
    }
}
