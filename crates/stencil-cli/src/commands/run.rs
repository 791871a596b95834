//! Batch convolution command shared by the `global` and `shared`
//! subcommands.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
#[allow(unused_imports)]
use tracing::{debug, info};

use stencil_batch::run_batch;
use stencil_core::{EngineConfig, Kernel, Strategy};
use stencil_io::dataset::list_bucket;

use crate::RunArgs;

pub fn run(strategy: Strategy, args: RunArgs) -> Result<()> {
    let resolution = args.resolution.pixels();
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(format!("output_parallel_{strategy}")));

    let inputs = list_bucket(&args.input_root, resolution as u32)
        .with_context(|| format!("Failed to list bucket: {}", args.input_root.display()))?;
    if inputs.is_empty() {
        bail!(
            "No PNG images found in {}",
            args.input_root.join(resolution.to_string()).display()
        );
    }

    info!(
        images = inputs.len(),
        resolution,
        %strategy,
        tile = args.tile,
        "starting convolution batch"
    );

    let config = EngineConfig::new(resolution, resolution, Kernel::edge_horizontal(), strategy)
        .with_tile(args.tile);
    let report = run_batch(config, &inputs, &output_dir).context("Batch failed")?;

    println!("Processing using {strategy} memory completed successfully!");
    println!(
        "Total time to convolve {} images: {:.6} seconds ({:.1} images/sec)",
        report.processed,
        report.compute_time.as_secs_f64(),
        report.throughput()
    );
    if report.skipped > 0 {
        println!("Skipped {} unreadable or mismatched images", report.skipped);
    }

    Ok(())
}
