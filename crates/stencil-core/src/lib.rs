//! # stencil-core
//!
//! Core types for the stencil convolution engine.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`GrayImage`] - Row-major grayscale `f32` plane, one sample per pixel
//! - [`PaddedImage`] - A `GrayImage` enlarged by a zero halo on every side
//! - [`Kernel`] - Immutable square convolution weight matrix with odd side
//! - [`EngineConfig`], [`Strategy`] - Validated engine configuration
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. The other crates depend on `stencil-core`:
//!
//! ```text
//! stencil-core (this crate)
//!    ^
//!    |
//!    +-- stencil-engine (work partitioning, memory strategies)
//!    +-- stencil-io (PNG decode/encode, dataset listing)
//!    +-- stencil-batch (batch orchestration)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod image;
pub mod kernel;

pub use config::{EngineConfig, Strategy, DEFAULT_TILE};
pub use error::{Error, Result};
pub use image::{GrayImage, PaddedImage};
pub use kernel::Kernel;
