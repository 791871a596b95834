//! # stencil-batch
//!
//! Drives the engine over a batch of same-resolution images.
//!
//! One engine (one compiled grid, one set of persistent buffers) serves the
//! whole batch. Images are processed strictly sequentially: decode, run,
//! encode, then the next image. Compute time is accumulated separately from
//! decode/encode time and returned in the [`BatchReport`].
//!
//! Failure policy: setup failures (bad configuration, unusable output
//! directory) abort the batch; per-image failures (unreadable file, wrong
//! resolution, encode error) are logged and skipped, so one bad file never
//! discards the rest of the batch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use stencil_core::EngineConfig;
use stencil_engine::{Engine, EngineError};
use thiserror::Error;
#[allow(unused_imports)]
use tracing::{debug, info, warn};

/// Errors that abort a batch before or during setup.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Engine construction failed (invalid configuration).
    #[error("engine setup failed: {0}")]
    Setup(#[from] EngineError),

    /// The output directory could not be created.
    #[error("output directory: {0}")]
    OutputDir(#[from] std::io::Error),
}

/// Result of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Images decoded, convolved and written successfully.
    pub processed: usize,
    /// Images skipped due to per-item failures.
    pub skipped: usize,
    /// Accumulated compute time across all processed images, excluding
    /// decode, encode and buffer fill.
    pub compute_time: Duration,
}

impl BatchReport {
    /// Processed images per second of compute time.
    pub fn throughput(&self) -> f64 {
        let secs = self.compute_time.as_secs_f64();
        if secs > 0.0 {
            self.processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// Runs the stencil batch over `inputs`, writing one output image per
/// successfully processed input into `output_dir` (created if absent),
/// keeping the input's file name.
///
/// # Errors
///
/// Returns [`BatchError`] on setup failure only; per-image failures are
/// counted in the report instead.
pub fn run_batch(
    config: EngineConfig,
    inputs: &[PathBuf],
    output_dir: &Path,
) -> Result<BatchReport, BatchError> {
    let mut engine = Engine::new(config)?;
    std::fs::create_dir_all(output_dir)?;

    let mut compute_time = Duration::ZERO;
    let mut processed = 0usize;
    let mut skipped = 0usize;

    info!(
        images = inputs.len(),
        strategy = %engine.config().strategy,
        output = %output_dir.display(),
        "starting batch"
    );

    for path in inputs {
        let image = match stencil_io::png::read_gray(path) {
            Ok(image) => image,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable input");
                skipped += 1;
                continue;
            }
        };

        let (output, elapsed) = match engine.run(&image) {
            Ok(result) => result,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping image");
                skipped += 1;
                continue;
            }
        };
        compute_time += elapsed;

        let file_name = match path.file_name() {
            Some(name) => name,
            None => {
                warn!(path = %path.display(), "skipping input without a file name");
                skipped += 1;
                continue;
            }
        };
        let out_path = output_dir.join(file_name);
        if let Err(e) = stencil_io::png::write_gray(&out_path, &output) {
            warn!(path = %out_path.display(), error = %e, "skipping unwritable output");
            skipped += 1;
            continue;
        }

        processed += 1;
        debug!(path = %path.display(), ?elapsed, "image done");
    }

    info!(processed, skipped, ?compute_time, "batch complete");
    Ok(BatchReport {
        processed,
        skipped,
        compute_time,
    })
}
