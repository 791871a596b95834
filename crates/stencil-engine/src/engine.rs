//! The engine: persistent buffers, strategy dispatch, compute timing.

use std::time::{Duration, Instant};

use stencil_core::{EngineConfig, GrayImage, PaddedImage, Strategy};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};
use crate::global::convolve_global;
use crate::grid::Grid;
use crate::tiled::convolve_tiled;

/// Stencil execution engine for a fixed batch resolution.
///
/// The padded-input scratch and the output buffer are sized once from the
/// configuration and reused for every image of the batch; only their
/// contents are rewritten per run. An `Engine` is exclusively owned by the
/// single in-flight run (`run` takes `&mut self`), so no image's data can
/// occupy the buffers while another is being processed.
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    padded: PaddedImage,
    out: Vec<f32>,
}

impl Engine {
    /// Validates the configuration and sizes the persistent buffers.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error; this is a setup
    /// failure and callers should treat it as fatal for the batch.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height, config.tile);
        let padded = PaddedImage::new(config.width, config.height, config.kernel.half());
        let out = vec![0.0; config.width * config.height];
        debug!(
            width = config.width,
            height = config.height,
            tile = config.tile,
            strategy = %config.strategy,
            groups = grid.len(),
            "engine ready"
        );
        Ok(Self {
            config,
            grid,
            padded,
            out,
        })
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The execution grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Convolves one image, returning the output and the elapsed time of
    /// the compute pass alone (padding and result copy-out excluded).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DimensionMismatch`] if the image does not
    /// match the configured batch resolution.
    pub fn run(&mut self, image: &GrayImage) -> EngineResult<(GrayImage, Duration)> {
        if image.width() != self.config.width || image.height() != self.config.height {
            return Err(EngineError::DimensionMismatch {
                expected_width: self.config.width,
                expected_height: self.config.height,
                actual_width: image.width(),
                actual_height: image.height(),
            });
        }

        let elapsed = match self.config.strategy {
            Strategy::Global => {
                self.padded.fill_from(image);
                let start = Instant::now();
                convolve_global(&self.padded, &self.config.kernel, &self.grid, &mut self.out);
                start.elapsed()
            }
            Strategy::Shared => {
                let start = Instant::now();
                convolve_tiled(image, &self.config.kernel, &self.grid, &mut self.out);
                start.elapsed()
            }
        };
        trace!(?elapsed, strategy = %self.config.strategy, "kernel pass");

        let output = GrayImage::from_vec(self.config.width, self.config.height, self.out.clone())?;
        Ok((output, elapsed))
    }
}
