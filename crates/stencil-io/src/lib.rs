//! # stencil-io
//!
//! I/O collaborators for the stencil pipeline:
//!
//! - [`png::read_gray`] / [`png::write_gray`] - 8-bit grayscale PNG to and
//!   from the engine's normalized `f32` representation
//! - [`dataset::list_bucket`] - resolution-bucket input listing
//!
//! The contracts are deliberately narrow: the decoder guarantees samples in
//! [0, 1] on success; the encoder rescales the engine's working range back
//! to 8 bits with saturation.

mod error;

pub mod dataset;
pub mod png;

pub use error::{IoError, IoResult};
