//! SST map renderer CLI.
//!
//! Reads a raw sea-surface-temperature grid, colors it over a background
//! map and writes the result as a PNG.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sst_mapper::{run, MapConfig, MapOverrides};

#[derive(Parser, Debug)]
#[command(name = "sst-mapper")]
#[command(about = "Render a sea-surface-temperature grid over a background map as PNG")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "SST_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: MapOverrides,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let mut config = match &args.config {
        Some(path) => MapConfig::from_yaml_file(path)?,
        None => MapConfig::default(),
    };
    args.overrides.apply_to(&mut config);

    let summary = run(&config).await?;

    info!(
        path = %summary.output_path.display(),
        width = summary.width,
        height = summary.height,
        land_pixels = summary.land_pixels,
        "Done"
    );

    Ok(())
}
