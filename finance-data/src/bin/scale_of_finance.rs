use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use finance_core::{InMemoryPlanRepository, PlanRepository};
use finance_data::{CropCsvLoader, ReportConfig, render_report};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Build a crop-wise scale of finance from a CSV file and print the report.
///
/// The CSV file may have any of the following columns (matched by header):
/// crop_name, season, acreage, seed_cost, fertilizer_cost, pesticide_cost,
/// labor_cost, irrigation_cost, machinery_rent, other_costs, expected_yield,
/// market_rate. Empty or malformed amounts count as zero.
#[derive(Parser, Debug)]
#[command(name = "scale-of-finance")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing one row per crop
    #[arg(short, long)]
    file: PathBuf,

    /// Member number (required to save the plan)
    #[arg(long)]
    member_number: String,

    /// Member name (required to save the plan)
    #[arg(long)]
    member_name: String,

    #[arg(long, default_value = "")]
    village: String,

    /// Total land area in acres
    #[arg(long, default_value = "")]
    land_area: String,

    /// TOML file with report settings (currency symbol, decimal places, grouping)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set, falling back to `info`.
/// * Writes to stderr so the report on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ReportConfig::default(),
    };
    debug!(?config, "report config");

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let mut plan = CropCsvLoader::load_plan(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;
    plan.member_number = args.member_number;
    plan.member_name = args.member_name;
    plan.village = args.village;
    plan.total_land_area = args.land_area;
    info!("Loaded {} crops from {}", plan.entry_count(), args.file.display());

    let mut repo = InMemoryPlanRepository::new();
    let saved = repo.save(&plan).context("Failed to save scale of finance")?;
    info!("Saved scale of finance {}", saved.id);

    print!("{}", render_report(&plan, &config));

    Ok(())
}
