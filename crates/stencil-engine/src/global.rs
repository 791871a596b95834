//! Global-memory strategy: direct gather from the padded buffer.
//!
//! Every output sample reads its full kernel footprint straight from the
//! padded image. Neighboring pixels re-read the same source samples; there
//! is no staging and no intra-group ordering constraint.

use rayon::prelude::*;
use stencil_core::{Kernel, PaddedImage};
#[allow(unused_imports)]
use tracing::trace;

use crate::grid::Grid;

/// Convolves the padded image into `out`, one band of work-groups per
/// rayon task.
///
/// `out` must hold `grid.width() * grid.height()` samples and the padded
/// image's halo must match the kernel's half-width.
pub fn convolve_global(padded: &PaddedImage, kernel: &Kernel, grid: &Grid, out: &mut [f32]) {
    let width = grid.width();
    debug_assert_eq!(out.len(), width * grid.height());
    debug_assert_eq!(padded.half_k(), kernel.half());
    trace!(width, height = grid.height(), tile = grid.tile(), "convolve_global");

    out.par_chunks_mut(grid.tile() * width)
        .enumerate()
        .for_each(|(band, rows)| {
            for group in grid.band(band) {
                for dy in 0..group.height {
                    let y = group.y + dy;
                    for dx in 0..group.width {
                        let x = group.x + dx;
                        rows[dy * width + x] = gather(padded, kernel, x, y);
                    }
                }
            }
        });
}

/// Weighted sum over the kernel footprint for output coordinate `(x, y)`.
///
/// Padded coordinates shift by the halo, so the footprint of `(x, y)` is
/// `[x, x + size) x [y, y + size)` in the padded buffer - always in range.
#[inline]
fn gather(padded: &PaddedImage, kernel: &Kernel, x: usize, y: usize) -> f32 {
    let size = kernel.size();
    let pw = padded.padded_width();
    let src = padded.data();
    let weights = kernel.data();

    let mut acc = 0.0f32;
    for ky in 0..size {
        let row = (y + ky) * pw + x;
        for kx in 0..size {
            acc += weights[ky * size + kx] * src[row + kx];
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::convolve_reference;
    use stencil_core::GrayImage;

    #[test]
    fn test_matches_reference_on_small_image() {
        let data: Vec<f32> = (0..7 * 5).map(|i| (i % 13) as f32 / 13.0).collect();
        let img = GrayImage::from_vec(7, 5, data).unwrap();
        let kernel = Kernel::edge_horizontal();
        let grid = Grid::new(7, 5, 4);
        let padded = img.pad(kernel.half());

        let mut out = vec![0.0f32; 7 * 5];
        convolve_global(&padded, &kernel, &grid, &mut out);

        let expected = convolve_reference(&img, &kernel);
        for (got, want) in out.iter().zip(expected.data()) {
            assert!((got - want).abs() < 1e-6);
        }
    }
}
