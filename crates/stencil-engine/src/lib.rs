//! # stencil-engine
//!
//! The stencil convolution execution engine.
//!
//! The engine maps a 2-D image onto a grid of fixed-size work-groups and
//! evaluates a small square stencil over every output pixel under one of
//! two memory strategies:
//!
//! - [`Strategy::Global`](stencil_core::Strategy::Global) - every sample is
//!   gathered directly from a host-padded full-image buffer. Neighboring
//!   pixels re-read the same source samples.
//! - [`Strategy::Shared`](stencil_core::Strategy::Shared) - each work-group
//!   first stages its tile plus halo into a group-local cache, then every
//!   output sample of the group is evaluated from the cache. One source
//!   read per staged sample instead of one per kernel tap.
//!
//! Both strategies compute the same zero-padded convolution; their outputs
//! agree at every pixel up to floating-point evaluation order.
//!
//! Work-groups are independent. Rows of groups (bands) run in parallel on
//! the rayon pool; groups within a band run sequentially, and the shared
//! strategy's load phase completes before its compute phase begins.
//!
//! # Example
//!
//! ```rust
//! use stencil_core::{EngineConfig, GrayImage, Kernel, Strategy};
//! use stencil_engine::Engine;
//!
//! let config = EngineConfig::new(64, 64, Kernel::edge_horizontal(), Strategy::Shared);
//! let mut engine = Engine::new(config).unwrap();
//! let (output, _elapsed) = engine.run(&GrayImage::new(64, 64)).unwrap();
//! assert_eq!(output.width(), 64);
//! assert_eq!(output.height(), 64);
//! ```

mod engine;
mod error;
pub mod global;
pub mod grid;
pub mod reference;
pub mod tiled;

pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use grid::{Grid, WorkGroup};
