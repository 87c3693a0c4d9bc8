use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use estimate_cli::{logging, render};
use estimate_core::calculations::{
    compute_estimate, BhkInput, BhkQuickEstimator, HomeSize, KitchenLayout,
    KitchenLayoutEstimator, QuoteQuality, RoomKind,
};
use estimate_core::catalog::PricingCatalog;
use estimate_core::models::{EstimationSession, PriceBand};
use estimate_core::submission::OrderPayload;
use estimate_core::validation::ready_to_submit;
use estimate_data::RateCardLoader;
use tracing::{debug, info};

/// Interior-design cost estimator.
#[derive(Parser, Debug)]
#[command(name = "estimate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Overlay a custom rate-card CSV on the built-in pricing
    #[arg(long, global = true)]
    rate_card: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the detailed room-by-room estimate from a session JSON file
    Estimate {
        /// Path to the estimation-session JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Emit the order payload JSON instead of the breakdown
        #[arg(long, default_value_t = false)]
        payload: bool,
    },

    /// Quick whole-home estimate from a BHK configuration
    Bhk {
        /// BHK count (1-5)
        #[arg(long)]
        bhk: u8,

        /// Carpet-area size: small or large
        #[arg(long, default_value = "small")]
        size: String,

        /// Fit-out grade: basic or premium
        #[arg(long, default_value = "basic")]
        quality: String,

        /// Override the bedroom count (clamped to the BHK number below 5BHK)
        #[arg(long)]
        bedrooms: Option<u32>,

        /// Override the kitchen count
        #[arg(long)]
        kitchens: Option<u32>,

        /// Override the living-room count
        #[arg(long)]
        living: Option<u32>,

        /// Override the dining-room count
        #[arg(long)]
        dining: Option<u32>,

        /// Override the bathroom count
        #[arg(long)]
        bathrooms: Option<u32>,
    },

    /// Quick kitchen estimate from its layout
    Kitchen {
        /// Layout: straight, lshaped, ushaped, or parallel
        #[arg(long)]
        layout: String,

        /// Fit-out grade: basic or premium
        #[arg(long, default_value = "basic")]
        quality: String,
    },
}

fn load_catalog(rate_card: Option<&PathBuf>) -> Result<PricingCatalog> {
    let base = PricingCatalog::default();
    let Some(path) = rate_card else {
        debug!("no rate card given, using the built-in pricing");
        return Ok(base);
    };

    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let records = RateCardLoader::parse(file)
        .with_context(|| format!("Failed to parse rate card: {}", path.display()))?;
    RateCardLoader::apply(&records, base).context("Failed to apply rate card")
}

fn parse_quality(s: &str) -> Result<QuoteQuality> {
    match QuoteQuality::parse(s) {
        Some(quality) => Ok(quality),
        None => bail!("unknown quality '{s}' (expected basic or premium)"),
    }
}

fn run_estimate(catalog: &PricingCatalog, file: &PathBuf, payload: bool) -> Result<()> {
    let reader =
        File::open(file).with_context(|| format!("Failed to open: {}", file.display()))?;
    let session: EstimationSession = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse session: {}", file.display()))?;
    info!(rooms = session.rooms.len(), "session loaded");

    let breakdown = compute_estimate(&session, catalog);

    if payload {
        if let Err(errors) = ready_to_submit(&session) {
            bail!("session is not ready to submit: {errors}");
        }
        let order = OrderPayload::build(&session, breakdown.total, Local::now().date_naive())?;
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        let band = PriceBand::around(breakdown.total);
        print!("{}", render::render_breakdown(&breakdown, &band));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_bhk(
    bhk: u8,
    size: &str,
    quality: &str,
    bedrooms: Option<u32>,
    kitchens: Option<u32>,
    living: Option<u32>,
    dining: Option<u32>,
    bathrooms: Option<u32>,
) -> Result<()> {
    let size = match HomeSize::parse(size) {
        Some(size) => size,
        None => bail!("unknown size '{size}' (expected small or large)"),
    };
    let quality = parse_quality(quality)?;

    let mut input = BhkInput::with_expected_rooms(bhk, size, quality)?;
    let overrides = [
        (RoomKind::Bedroom, bedrooms),
        (RoomKind::Kitchen, kitchens),
        (RoomKind::Living, living),
        (RoomKind::Dining, dining),
        (RoomKind::Bathroom, bathrooms),
    ];
    for (kind, count) in overrides {
        if let Some(count) = count {
            input.room_counts.insert(kind, count);
        }
    }
    input.room_counts = BhkQuickEstimator::normalize_room_counts(bhk, input.room_counts);

    let range = BhkQuickEstimator::new().estimate(&input)?;
    println!(
        "{}BHK {} ({}): {}",
        bhk,
        quality.as_str(),
        match size {
            HomeSize::Small => "small",
            HomeSize::Large => "large",
        },
        render::format_lakh_range(&range)
    );

    Ok(())
}

fn run_kitchen(layout: &str, quality: &str) -> Result<()> {
    let layout = match KitchenLayout::parse(layout) {
        Some(layout) => layout,
        None => bail!("unknown layout '{layout}' (expected straight, lshaped, ushaped, or parallel)"),
    };
    let quality = parse_quality(quality)?;

    let range = KitchenLayoutEstimator::new().estimate(layout, quality);
    println!(
        "{} kitchen, {}: {}",
        layout.as_str(),
        quality.as_str(),
        render::format_lakh_range(&range)
    );

    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let catalog = load_catalog(args.rate_card.as_ref())?;

    match args.command {
        Command::Estimate { file, payload } => run_estimate(&catalog, &file, payload),
        Command::Bhk {
            bhk,
            size,
            quality,
            bedrooms,
            kitchens,
            living,
            dining,
            bathrooms,
        } => run_bhk(
            bhk, &size, &quality, bedrooms, kitchens, living, dining, bathrooms,
        ),
        Command::Kitchen { layout, quality } => run_kitchen(&layout, &quality),
    }
}
