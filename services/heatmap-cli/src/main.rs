//! Temperature heatmap CLI.
//!
//! Fetches the monthly global temperature-variance dataset (or reads it
//! from disk), computes the heatmap render plan, and writes the SVG
//! artifact.

mod source;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use heatmap_common::{Padding, Viewport};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Parser, Debug)]
#[command(name = "heatmap-cli")]
#[command(about = "Render the global temperature dataset as an SVG heatmap")]
struct Args {
    /// Dataset URL (ignored when --input is given)
    #[arg(long, env = "HEATMAP_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Local dataset JSON file instead of fetching
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "500")]
    height: f64,

    /// Padding above the chart (titles)
    #[arg(long, default_value = "100")]
    pad_top: f64,

    /// Padding right of the chart
    #[arg(long, default_value = "10")]
    pad_right: f64,

    /// Padding below the chart (x axis and legend)
    #[arg(long, default_value = "150")]
    pad_bottom: f64,

    /// Padding left of the chart (month labels)
    #[arg(long, default_value = "80")]
    pad_left: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
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
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to initialize tracing")?;

    let dataset = match &args.input {
        Some(path) => source::load_file(path)?,
        None => source::fetch_url(&args.url).await?,
    };

    let viewport = Viewport::new(args.width, args.height);
    let padding = Padding::new(args.pad_top, args.pad_right, args.pad_bottom, args.pad_left);

    let plan = heatmap_render::render(&dataset, viewport, padding)
        .context("failed to compute render plan")?;
    let svg = heatmap_svg::write_svg(&plan).context("failed to serialize SVG")?;

    std::fs::write(&args.output, &svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        cells = plan.cells.len(),
        output = %args.output.display(),
        "wrote heatmap"
    );

    Ok(())
}
