//! Grayscale image buffers.
//!
//! [`GrayImage`] is the engine's working representation: one `f32` sample
//! per pixel in [0, 1], stored row-major, top-to-bottom:
//!
//! ```text
//! Memory: [v v v v ...]  <- Row 0
//!         [v v v v ...]  <- Row 1
//!         ...
//! ```
//!
//! [`PaddedImage`] is the same layout enlarged by `half_k` samples of zero
//! halo on every side, so that a convolution footprint centered on any
//! source pixel stays inside the buffer.

use crate::{Error, Result};

/// Owned single-channel image buffer.
///
/// Samples are `f32` and, for decoded inputs, normalized to [0, 1]. The
/// convolution output reuses this type with unclamped values; clamping
/// happens at encode time.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayImage {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl GrayImage {
    /// Creates a new image filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Creates an image from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height` or either dimension is zero.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "dimensions must be > 0",
            ));
        }
        if data.len() != width * height {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", width * height, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow the sample buffer.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consume the image, returning the sample buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Set the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = value;
    }

    /// Borrow row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Produce a zero-halo enlargement of this image.
    pub fn pad(&self, half_k: usize) -> PaddedImage {
        let mut padded = PaddedImage::new(self.width, self.height, half_k);
        padded.fill_from(self);
        padded
    }
}

/// A [`GrayImage`] enlarged by `half_k` zero samples on each side.
///
/// Invariants: `padded_width = width + 2*half_k`,
/// `padded_height = height + 2*half_k`, the halo is exactly zero and the
/// interior `[half_k, half_k+width) x [half_k, half_k+height)` equals the
/// source image. `fill_from` rewrites only the interior, so one buffer can
/// be reused across a batch of same-sized images.
#[derive(Debug, Clone)]
pub struct PaddedImage {
    data: Vec<f32>,
    width: usize,
    height: usize,
    half_k: usize,
}

impl PaddedImage {
    /// Allocates a zeroed padded buffer for sources of `width x height`.
    pub fn new(width: usize, height: usize, half_k: usize) -> Self {
        let pw = width + 2 * half_k;
        let ph = height + 2 * half_k;
        Self {
            data: vec![0.0; pw * ph],
            width,
            height,
            half_k,
        }
    }

    /// Copies `image` into the interior, leaving the halo zero.
    ///
    /// Idempotent for the same source; rewriting with a different source of
    /// the same shape fully replaces the previous interior.
    ///
    /// # Panics
    ///
    /// Panics if `image` does not match the dimensions this buffer was
    /// sized for.
    pub fn fill_from(&mut self, image: &GrayImage) {
        assert!(
            image.width() == self.width && image.height() == self.height,
            "padded buffer sized for {}x{}, got {}x{}",
            self.width,
            self.height,
            image.width(),
            image.height()
        );
        let pw = self.padded_width();
        for y in 0..self.height {
            let start = (y + self.half_k) * pw + self.half_k;
            self.data[start..start + self.width].copy_from_slice(image.row(y));
        }
    }

    /// Source image width (without halo).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Source image height (without halo).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Halo thickness on each side.
    #[inline]
    pub fn half_k(&self) -> usize {
        self.half_k
    }

    /// Width including the halo.
    #[inline]
    pub fn padded_width(&self) -> usize {
        self.width + 2 * self.half_k
    }

    /// Height including the halo.
    #[inline]
    pub fn padded_height(&self) -> usize {
        self.height + 2 * self.half_k
    }

    /// Borrow the padded sample buffer.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Sample at padded coordinate `(px, py)`.
    #[inline]
    pub fn get(&self, px: usize, py: usize) -> f32 {
        self.data[py * self.padded_width() + px]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> GrayImage {
        let data: Vec<f32> = (0..width * height).map(|i| i as f32).collect();
        GrayImage::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_from_vec_rejects_bad_len() {
        assert!(GrayImage::from_vec(4, 4, vec![0.0; 15]).is_err());
        assert!(GrayImage::from_vec(0, 4, vec![]).is_err());
    }

    #[test]
    fn test_pad_interior_verbatim() {
        let img = ramp(5, 3);
        let padded = img.pad(1);
        assert_eq!(padded.padded_width(), 7);
        assert_eq!(padded.padded_height(), 5);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(padded.get(x + 1, y + 1), img.get(x, y));
            }
        }
    }

    #[test]
    fn test_pad_halo_zero() {
        let img = ramp(4, 4);
        let padded = img.pad(2);
        let pw = padded.padded_width();
        let ph = padded.padded_height();
        for py in 0..ph {
            for px in 0..pw {
                let in_interior = px >= 2 && px < 2 + 4 && py >= 2 && py < 2 + 4;
                if !in_interior {
                    assert_eq!(padded.get(px, py), 0.0, "halo at ({px}, {py})");
                }
            }
        }
    }

    #[test]
    fn test_pad_idempotent_refill() {
        let img = ramp(4, 4);
        let mut padded = img.pad(1);
        let once = padded.data().to_vec();
        padded.fill_from(&img);
        assert_eq!(padded.data(), &once[..]);
    }

    #[test]
    fn test_refill_replaces_interior() {
        let a = ramp(3, 3);
        let b = GrayImage::from_vec(3, 3, vec![7.0; 9]).unwrap();
        let mut padded = a.pad(1);
        padded.fill_from(&b);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(padded.get(x + 1, y + 1), 7.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "padded buffer sized for")]
    fn test_refill_rejects_mismatched_source() {
        let mut padded = PaddedImage::new(4, 4, 1);
        padded.fill_from(&GrayImage::new(5, 4));
    }
}
