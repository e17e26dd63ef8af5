use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use trajectory_backend::api::build_figure;
use trajectory_backend::config::ChartConfig;
use trajectory_backend::io::{write_figure, ExportFormat};
use trajectory_backend::preprocessing::TrajectoryPipeline;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Html => ExportFormat::Html,
        }
    }
}

/// Build an animated case-trajectory chart from a per-region CSV.
#[derive(Debug, Parser)]
#[command(name = "trajectory-chart", version)]
struct Args {
    /// Per-region case table (CSV)
    input: PathBuf,

    /// Chart configuration (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "trajectory.html")]
    output: PathBuf,

    /// Output format; guessed from the output extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Seed for region colours, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    let pipeline = TrajectoryPipeline::with_config(config);
    let result = match args.seed {
        Some(seed) => pipeline.process(&args.input, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => pipeline.process(&args.input, &mut rand::rng()),
    }
    .with_context(|| format!("Failed to build chart from {}", args.input.display()))?;

    log::info!(
        "{} observations, {} regions, {} frames ({} rows dropped)",
        result.total_observations,
        result.region_count,
        result.chart.frames.len(),
        result.dropped_rows
    );

    let figure = build_figure(&result.chart, pipeline.config());
    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or_else(|| ExportFormat::from_path(&args.output));
    write_figure(&figure, &args.output, format)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
