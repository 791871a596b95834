//! Shared-memory strategy: cooperative tile staging.
//!
//! Each work-group runs a two-phase protocol:
//!
//! 1. **Load**: the group's `(w + 2*half_k) x (h + 2*half_k)` footprint is
//!    staged from the raw image into a group-local tile; coordinates
//!    outside the image load zero, which reproduces the zero halo without
//!    a host-side pad.
//! 2. **Compute**: every output sample of the group is evaluated from the
//!    tile only.
//!
//! The load phase completes before the compute phase begins - the CPU
//! equivalent of a work-group barrier between cooperative staging and
//! evaluation. This converts the global strategy's per-tap source reads
//! into one source read per staged sample plus tile-local reads.

use rayon::prelude::*;
use stencil_core::{GrayImage, Kernel};
#[allow(unused_imports)]
use tracing::trace;

use crate::grid::Grid;

/// Convolves `image` into `out` with per-group tile staging, one band of
/// work-groups per rayon task.
///
/// `out` must hold `grid.width() * grid.height()` samples. The tile
/// scratch is allocated once per band and reused across that band's
/// groups; its lifetime never crosses a group visit.
pub fn convolve_tiled(image: &GrayImage, kernel: &Kernel, grid: &Grid, out: &mut [f32]) {
    let width = grid.width();
    let height = grid.height();
    debug_assert_eq!(out.len(), width * height);
    trace!(width, height, tile = grid.tile(), "convolve_tiled");

    let half_k = kernel.half();
    let size = kernel.size();
    let weights = kernel.data();
    let src = image.data();
    let tile_edge = grid.tile() + 2 * half_k;

    out.par_chunks_mut(grid.tile() * width)
        .enumerate()
        .for_each(|(band, rows)| {
            let mut tile = vec![0.0f32; tile_edge * tile_edge];
            for group in grid.band(band) {
                let tw = group.width + 2 * half_k;
                let th = group.height + 2 * half_k;

                // Load phase.
                for ty in 0..th {
                    let sy = group.y as isize + ty as isize - half_k as isize;
                    let in_rows = sy >= 0 && sy < height as isize;
                    for tx in 0..tw {
                        let sx = group.x as isize + tx as isize - half_k as isize;
                        tile[ty * tw + tx] = if in_rows && sx >= 0 && sx < width as isize {
                            src[sy as usize * width + sx as usize]
                        } else {
                            0.0
                        };
                    }
                }

                // Compute phase: tile reads only.
                for dy in 0..group.height {
                    for dx in 0..group.width {
                        let mut acc = 0.0f32;
                        for ky in 0..size {
                            let row = (dy + ky) * tw + dx;
                            for kx in 0..size {
                                acc += weights[ky * size + kx] * tile[row + kx];
                            }
                        }
                        rows[dy * width + group.x + dx] = acc;
                    }
                }
            }
        });
}
