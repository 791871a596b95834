//! Error types for core stencil types.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or validating core types.
#[derive(Debug, Error)]
pub enum Error {
    /// Image dimensions are unusable or don't match the supplied data.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Reason why dimensions are invalid.
        reason: String,
    },

    /// Kernel weight matrix is malformed.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Engine configuration failed startup validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidKernel`] error.
    #[inline]
    pub fn invalid_kernel(msg: impl Into<String>) -> Self {
        Self::InvalidKernel(msg.into())
    }

    /// Creates an [`Error::InvalidConfig`] error.
    #[inline]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(0, 512, "width must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("0x512"));
        assert!(msg.contains("width must be > 0"));
    }

    #[test]
    fn test_invalid_kernel_message() {
        let err = Error::invalid_kernel("side must be odd");
        assert!(err.to_string().contains("side must be odd"));
    }
}
