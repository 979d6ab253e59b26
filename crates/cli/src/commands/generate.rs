//! Generate command.
//!
//! Draws a batch of royalty records and writes it to a tabular file in a
//! single pass.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing::info;

use royalty_gen_core::{
    generate_batch, BatchSummary, ConfigLoader, ExportFormat, GeneratorConfig, WordListNames,
};
use royalty_gen_data::export_records;

/// Arguments for the generate command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Config file path (default: config/Generator.toml; missing file means defaults)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of records to generate (default: 50)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output file path (default: FakeRoyaltyData.csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format: csv, json, xlsx (default: csv)
    #[arg(long)]
    pub format: Option<String>,

    /// Seed for a reproducible batch
    #[arg(long)]
    pub seed: Option<u64>,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

/// Loads the config file and applies command-line overrides.
///
/// # Errors
/// Returns error if the config cannot be loaded or an override is invalid.
pub fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from(Path::new(path))?,
        None => ConfigLoader::load()?,
    };

    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(format) = &args.format {
        config.format = format
            .parse::<ExportFormat>()
            .map_err(|e| anyhow!("Invalid format: {}", e))?;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(today) = &args.today {
        let date = NaiveDate::parse_from_str(today, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today date: {}", today))?;
        config.today = Some(date);
    }

    config.validate()?;
    Ok(config)
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    info!(
        "Generating {} records as of {} (seed: {})",
        config.count,
        today,
        config
            .seed
            .map_or_else(|| "entropy".to_string(), |s| s.to_string())
    );

    let records = generate_batch(&config, today, &mut rng, &mut WordListNames)?;
    export_records(&config.output, config.format, &records)?;

    BatchSummary::from_records(&records).log();
    println!("Wrote {} records to {}", records.len(), config.output);

    Ok(())
}
