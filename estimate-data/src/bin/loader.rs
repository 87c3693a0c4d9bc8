use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use estimate_core::catalog::PricingCatalog;
use estimate_data::RateCardLoader;

/// Load a rate-card CSV and report the resulting pricing catalog.
///
/// The CSV file should have the following columns:
/// - category: wood, finish, hardware, labor, surcharge, or kitchen
/// - key: the entry key within the category (e.g. plywood, design)
/// - rate: the new rate for that entry
/// - range_min, range_max: optional indicative range (wood and finish)
/// - label: optional quality label (wood only)
#[derive(Parser, Debug)]
#[command(name = "rate-card-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the rate-card CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Print the full resulting catalog as JSON instead of a summary
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = RateCardLoader::parse(file)
        .with_context(|| format!("Failed to parse rate card: {}", args.file.display()))?;

    println!("Parsed {} records from {}", records.len(), args.file.display());

    let catalog = RateCardLoader::apply(&records, PricingCatalog::default())
        .context("Failed to apply rate card")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        println!("Rate card applied cleanly; {} overrides.", records.len());
    }

    Ok(())
}
