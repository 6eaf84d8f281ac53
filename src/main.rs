//! SKU launch-date enrichment.
//!
//! Reads `data/dashboard/dim_sku.json`, derives `launch_date` for every SKU
//! carrying `season_year` + `season`, and rewrites the file in place:
//!   - quarter (default): `<season_year>-<MM>-01`, MM from Q1..Q4 -> 02/05/08/11
//!   - waves: staggered dates inside each season, ordered by sku_id

mod enrich;
mod error;
mod report;
mod season;
mod settings;
mod store;
mod waves;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use enrich::Schedule;
use settings::Settings;

#[derive(Parser)]
#[command(name = "sku_launch", about = "Derive launch_date for SKUs from their season")]
struct Cli {
    /// SKU file to rewrite (default: <project>/data/dashboard/dim_sku.json)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// How launch dates are derived
    #[arg(short, long, value_enum, default_value_t = ScheduleArg::Quarter)]
    schedule: ScheduleArg,
    /// Number of records shown after the run
    #[arg(short = 'n', long)]
    preview: Option<usize>,
    /// Transform and report without writing the file
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScheduleArg {
    Quarter,
    Waves,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(settings = ?settings, "starting enrichment");

    let path = cli.file.unwrap_or_else(|| settings.data_file());
    let schedule = match cli.schedule {
        ScheduleArg::Quarter => Schedule::Quarter,
        ScheduleArg::Waves => Schedule::Waves(settings.wave_plan()),
    };
    let preview = cli.preview.unwrap_or(settings.preview);

    let outcome = enrich::enrich(&path, &schedule, cli.dry_run)
        .with_context(|| format!("enrichment of {} failed", path.display()))?;
    info!(
        records = outcome.records.len(),
        enriched = outcome.enriched,
        written = outcome.written,
        "enrichment finished"
    );

    report::print(&outcome, preview);
    Ok(())
}
