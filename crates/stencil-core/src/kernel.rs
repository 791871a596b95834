//! Convolution kernels.
//!
//! A [`Kernel`] is an immutable square matrix of signed weights with odd
//! side length, shared read-only across a whole batch.
//!
//! # Presets
//!
//! - [`Kernel::edge_horizontal`] - horizontal edge detector
//! - [`Kernel::edge_vertical`] - vertical edge detector
//!
//! # Example
//!
//! ```rust
//! use stencil_core::Kernel;
//!
//! let k = Kernel::edge_horizontal();
//! assert_eq!(k.size(), 3);
//! assert_eq!(k.half(), 1);
//! ```

use crate::{Error, Result};

/// Square convolution weight matrix, row-major, odd side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    data: Vec<f32>,
    size: usize,
}

impl Kernel {
    /// Creates a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernel`] if `size` is even or zero, or if
    /// `data.len()` is not `size * size`.
    pub fn new(data: Vec<f32>, size: usize) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(Error::invalid_kernel(format!(
                "side length must be odd, got {size}"
            )));
        }
        if data.len() != size * size {
            return Err(Error::invalid_kernel(format!(
                "weight count {} doesn't match {size}x{size}",
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Horizontal edge detection kernel.
    ///
    /// ```text
    ///  1  1  1
    ///  0  0  0
    /// -1 -1 -1
    /// ```
    pub fn edge_horizontal() -> Self {
        Self {
            data: vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, -1.0],
            size: 3,
        }
    }

    /// Vertical edge detection kernel.
    ///
    /// ```text
    ///  1  0 -1
    ///  1  0 -1
    ///  1  0 -1
    /// ```
    pub fn edge_vertical() -> Self {
        Self {
            data: vec![1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 0.0, -1.0],
            size: 3,
        }
    }

    /// Side length of the kernel.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-width of the footprint, `floor(size / 2)`.
    #[inline]
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Borrow the row-major weights.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Weight at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.size + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_rejects_even_side() {
        assert!(Kernel::new(vec![0.0; 4], 2).is_err());
        assert!(Kernel::new(vec![], 0).is_err());
    }

    #[test]
    fn test_new_rejects_wrong_len() {
        assert!(Kernel::new(vec![0.0; 8], 3).is_err());
    }

    #[test]
    fn test_edge_presets() {
        let h = Kernel::edge_horizontal();
        assert_eq!(h.size(), 3);
        assert_eq!(h.get(0, 0), 1.0);
        assert_eq!(h.get(2, 2), -1.0);

        let v = Kernel::edge_vertical();
        assert_eq!(v.get(0, 0), 1.0);
        assert_eq!(v.get(0, 2), -1.0);
        assert_eq!(v.get(1, 1), 0.0);

        // Both presets sum to zero: flat regions map to zero output.
        assert_abs_diff_eq!(h.data().iter().sum::<f32>(), 0.0);
        assert_abs_diff_eq!(v.data().iter().sum::<f32>(), 0.0);
    }
}
