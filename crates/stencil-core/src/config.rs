//! Engine configuration.
//!
//! Resolution, kernel and tile edge length are configuration parameters
//! validated once at startup rather than compile-time constants.

use std::fmt;

use crate::{Error, Kernel, Result};

/// Default work-group tile edge length.
pub const DEFAULT_TILE: usize = 16;

/// Memory strategy for the stencil evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Direct gather from the host-padded full-image buffer.
    Global,
    /// Cooperative tile staging into a work-group-local cache before
    /// evaluation.
    Shared,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Global => write!(f, "global"),
            Strategy::Shared => write!(f, "shared"),
        }
    }
}

/// Validated configuration for one batch of same-resolution images.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Expected image width for the batch.
    pub width: usize,
    /// Expected image height for the batch.
    pub height: usize,
    /// Work-group tile edge length.
    pub tile: usize,
    /// Convolution kernel, shared read-only across the batch.
    pub kernel: Kernel,
    /// Memory strategy.
    pub strategy: Strategy,
}

impl EngineConfig {
    /// Creates a configuration with the default tile edge length.
    pub fn new(width: usize, height: usize, kernel: Kernel, strategy: Strategy) -> Self {
        Self {
            width,
            height,
            tile: DEFAULT_TILE,
            kernel,
            strategy,
        }
    }

    /// Overrides the tile edge length.
    pub fn with_tile(mut self, tile: usize) -> Self {
        self.tile = tile;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if any dimension is zero or the
    /// tile edge is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_config(format!(
                "resolution must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if self.tile == 0 {
            return Err(Error::invalid_config("tile edge length must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        let config = EngineConfig::new(512, 512, Kernel::edge_horizontal(), Strategy::Global);
        assert_eq!(config.tile, DEFAULT_TILE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dims() {
        let config = EngineConfig::new(0, 512, Kernel::edge_horizontal(), Strategy::Shared);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tile() {
        let config =
            EngineConfig::new(512, 512, Kernel::edge_horizontal(), Strategy::Shared).with_tile(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Global.to_string(), "global");
        assert_eq!(Strategy::Shared.to_string(), "shared");
    }
}
