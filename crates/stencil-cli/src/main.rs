//! stencil - batch stencil convolution CLI
//!
//! Applies a fixed 3x3 edge filter to a resolution bucket of grayscale
//! images under one of two memory strategies and reports compute
//! throughput.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use stencil_core::{Strategy, DEFAULT_TILE};

mod commands;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author, version, about = "Batch 2D stencil convolution over grayscale images")]
#[command(long_about = "
Applies a fixed 3x3 edge-detection stencil to every PNG of a resolution
bucket and reports the accumulated compute time and throughput.

Examples:
  stencil global 512                    # direct global-memory gather
  stencil shared 1024                   # cooperative tile staging
  stencil shared 512 --tile 32          # non-default work-group size
  stencil global 512 --output-dir out   # custom output directory
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convolve a bucket with the direct global-memory gather
    #[command(visible_alias = "g")]
    Global(RunArgs),

    /// Convolve a bucket with cooperative tile staging
    #[command(visible_alias = "s")]
    Shared(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Input resolution bucket
    #[arg(value_enum)]
    resolution: Resolution,

    /// Dataset root containing one directory per resolution
    #[arg(long, default_value = "dataset/grayscale")]
    input_root: PathBuf,

    /// Output directory, created if absent (default depends on strategy)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Work-group tile edge length
    #[arg(long, default_value_t = DEFAULT_TILE)]
    tile: usize,
}

/// The enumerated resolution buckets of the dataset.
#[derive(ValueEnum, Clone, Copy)]
enum Resolution {
    #[value(name = "512")]
    R512,
    #[value(name = "1024")]
    R1024,
}

impl Resolution {
    fn pixels(self) -> usize {
        match self {
            Resolution::R512 => 512,
            Resolution::R1024 => 1024,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Global(args) => commands::run::run(Strategy::Global, args),
        Commands::Shared(args) => commands::run::run(Strategy::Shared, args),
    }
}
