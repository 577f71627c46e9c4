//! Command-line interface for rowgen
//!
//! # Usage Examples
//!
//! ## Catalog
//! ```bash
//! # Print every catalog field as a YAML schema
//! rowgen catalog
//!
//! # Same, as JSON
//! rowgen catalog --format json
//! ```
//!
//! ## Generate
//! ```bash
//! # Generate records for a schema file, one JSON object per line on stdout
//! rowgen generate --schema schema.yaml --rows 1000 --min-partitions 4
//!
//! # Generate records for the catalog schema with a config file and a seed override
//! RUST_LOG=info rowgen generate --catalog --config generator.yaml --seed 7
//! ```

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use rowgen::{JsonLinesSink, SaveMode, Sink};
use rowgen_catalog::Catalog;
use rowgen_core::Schema;
use rowgen_generator::{generate, GeneratorConfig};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowgen")]
#[command(about = "Generate randomized, partitioned datasets for any nested schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog schema covering every supported type
    Catalog {
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Generate a dataset and write it as JSON lines to stdout
    Generate(GenerateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["schema", "catalog"])))]
struct GenerateArgs {
    /// Path to a YAML schema file
    #[arg(long, value_name = "PATH", env = "ROWGEN_SCHEMA")]
    schema: Option<PathBuf>,

    /// Generate for the catalog schema instead of a schema file
    #[arg(long)]
    catalog: bool,

    /// Path to a YAML generator configuration file
    #[arg(long, value_name = "PATH", env = "ROWGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Minimum number of partitions (at most 65536)
    #[arg(long, default_value = "1", env = "ROWGEN_MIN_PARTITIONS")]
    min_partitions: usize,

    /// Total number of records (overrides the config file)
    #[arg(long, env = "ROWGEN_ROWS")]
    rows: Option<u64>,

    /// Random seed (overrides the config file)
    #[arg(long, env = "ROWGEN_SEED")]
    seed: Option<u64>,

    /// Upper bound on collection, string and binary lengths (overrides the config file)
    #[arg(long)]
    max_collection_len: Option<usize>,

    /// Probability that a nullable slot is null (overrides the config file)
    #[arg(long)]
    null_probability: Option<f64>,

    /// Write policy passed to the sink
    #[arg(long, value_enum, default_value = "append")]
    mode: SaveMode,
}

impl GenerateArgs {
    fn load_schema(&self) -> anyhow::Result<Schema> {
        match &self.schema {
            Some(path) => Schema::from_file(path)
                .with_context(|| format!("Failed to load schema from {path:?}")),
            None => Ok(Catalog::build()
                .context("Failed to build the catalog")?
                .schema()),
        }
    }

    fn load_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load generator config from {path:?}"))?,
            None => GeneratorConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max_collection_len) = self.max_collection_len {
            config.max_collection_len = max_collection_len;
        }
        if let Some(null_probability) = self.null_probability {
            config.null_probability = null_probability;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { format } => run_catalog(format),
        Commands::Generate(args) => run_generate(args).await,
    }
}

fn run_catalog(format: OutputFormat) -> anyhow::Result<()> {
    let schema = Catalog::build().context("Failed to build the catalog")?.schema();
    tracing::info!("Catalog has {} fields", schema.len());

    let output = match format {
        OutputFormat::Yaml => schema.to_yaml().context("Failed to render catalog as YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(&schema).context("Failed to render catalog as JSON")?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write catalog")?;
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = args.load_schema()?;
    let config = args.load_config()?;

    tracing::info!("Schema: {} fields", schema.len());
    tracing::info!("Config: {:?}", config);
    tracing::info!("Mode: {:?}", args.mode);

    let dataset = generate(schema, args.min_partitions, &config)
        .await
        .context("Failed to generate dataset")?;

    let stdout = std::io::stdout().lock();
    let mut sink = JsonLinesSink::new(BufWriter::new(stdout));
    let report = sink
        .write(&dataset, args.mode)
        .context("Failed to write dataset")?;

    tracing::info!(
        "Done: {} records in {} partitions written in {:?}",
        report.records_written,
        report.partitions_written,
        report.duration
    );
    Ok(())
}
