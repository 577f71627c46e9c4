//! JSON lines generation workflow test.
//!
//! This test demonstrates the load -> generate -> write workflow:
//! 1. Load a schema fixture and a generator config file
//! 2. Generate a partitioned dataset with a fixed seed
//! 3. Write it through the JSON lines sink into a temporary file
//! 4. Read the file back and check every line against the schema

use rowgen::{generate, GeneratorConfig, JsonLinesSink, SaveMode, Schema, Sink};
use rowgen_catalog::Catalog;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use tempfile::TempDir;

const SEED: u64 = 42;
const ROW_COUNT: u64 = 50;
const MIN_PARTITIONS: usize = 4;

#[tokio::test]
async fn test_generate_to_jsonl_file() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("rowgen=debug,rowgen_generator=debug")
        .try_init()
        .ok();

    let schema = Schema::from_file("tests/fixtures/orders_schema.yaml")?;
    let temp_dir = TempDir::new()?;

    let config_path = temp_dir.path().join("generator.yaml");
    std::fs::write(
        &config_path,
        format!("seed: {SEED}\nrows: {ROW_COUNT}\nmax_collection_len: 3\n"),
    )?;
    let config = GeneratorConfig::from_file(&config_path)?;
    assert_eq!(config.rows, ROW_COUNT);

    // === GENERATE ===
    let dataset = generate(schema.clone(), MIN_PARTITIONS, &config).await?;
    assert!(dataset.num_partitions() >= MIN_PARTITIONS);
    assert_eq!(dataset.len() as u64, ROW_COUNT);

    // === WRITE ===
    let output_path = temp_dir.path().join("orders.jsonl");
    let mut sink = JsonLinesSink::new(BufWriter::new(File::create(&output_path)?));
    let report = sink.write(&dataset, SaveMode::ErrorIfExists)?;
    assert_eq!(report.records_written, ROW_COUNT);
    drop(sink);

    // === VERIFY ===
    let reader = BufReader::new(File::open(&output_path)?);
    let mut lines = 0u64;
    let mut last_partition = 0u64;
    for line in reader.lines() {
        let value: serde_json::Value = serde_json::from_str(&line?)?;
        let partition = value["partition"].as_u64().ok_or("missing partition")?;
        assert!(partition >= last_partition, "partitions out of order");
        last_partition = partition;

        let record = value["record"].as_object().ok_or("record is not an object")?;
        assert_eq!(record.len(), schema.len());
        assert!(record["order_id"].is_i64());
        assert!(record["total"].is_string());
        assert!(record["placed_at"].is_string());
        assert!(record["attributes"].is_array());
        assert!(record["address"]["city"].is_string());
        lines += 1;
    }
    assert_eq!(lines, ROW_COUNT);

    Ok(())
}

#[tokio::test]
async fn test_same_seed_same_output() -> Result<(), Box<dyn std::error::Error>> {
    let schema = Catalog::build()?.schema();
    let config = GeneratorConfig::default().with_rows(20).with_seed(SEED);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let dataset = generate(schema.clone(), 3, &config).await?;
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.write(&dataset, SaveMode::Append)?;
        outputs.push(sink.into_inner());
    }

    assert!(!outputs[0].is_empty());
    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}
