//! Engine error types.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors raised by the execution engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An image of the wrong resolution was handed to an engine configured
    /// for a fixed batch resolution.
    #[error(
        "dimension mismatch: expected {expected_width}x{expected_height}, \
         got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// Width the engine was configured for.
        expected_width: usize,
        /// Height the engine was configured for.
        expected_height: usize,
        /// Width of the rejected image.
        actual_width: usize,
        /// Height of the rejected image.
        actual_height: usize,
    },

    /// Invalid configuration or core type construction failure.
    #[error(transparent)]
    Core(#[from] stencil_core::Error),
}
