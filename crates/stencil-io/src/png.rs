//! PNG format support.
//!
//! Decodes PNG files into the engine's normalized grayscale representation
//! and encodes results back to 8-bit grayscale. Color inputs are reduced
//! with Rec.601 luma, so a color photograph decodes to the same plane a
//! grayscale export of it would.
//!
//! # Example
//!
//! ```rust,ignore
//! use stencil_io::png::{read_gray, write_gray};
//!
//! let image = read_gray("input.png")?;
//! write_gray("output.png", &image)?;
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use stencil_core::GrayImage;
#[allow(unused_imports)]
use tracing::trace;

use crate::{IoError, IoResult};

// Rec.601 luma weights, the grayscale conversion OpenCV applies on decode.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Reads a PNG file as a normalized grayscale plane.
///
/// 8-bit grayscale samples map to `v / 255`, 16-bit to `v / 65535`; 8-bit
/// RGB/RGBA inputs are reduced with Rec.601 luma first. Anything else is
/// rejected with [`IoError::UnsupportedBitDepth`].
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width as usize;
    let height = info.height as usize;
    let bytes = &buf[..info.buffer_size()];
    trace!(width, height, color = ?info.color_type, depth = ?info.bit_depth, "read_gray");

    let data: Vec<f32> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            bytes.iter().map(|&v| v as f32 / 255.0).collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => bytes_to_u16(bytes)
            .iter()
            .map(|&v| v as f32 / 65535.0)
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            bytes.chunks(2).map(|ga| ga[0] as f32 / 255.0).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes.chunks(3).map(luma_u8).collect(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => bytes.chunks(4).map(luma_u8).collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    GrayImage::from_vec(width, height, data).map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes a grayscale plane as an 8-bit grayscale PNG.
///
/// Samples are rescaled by 255 and saturated into `[0, 255]`, so unclamped
/// convolution results (negative, or above the source range) land on the
/// nearest representable intensity.
pub fn write_gray<P: AsRef<Path>>(path: P, image: &GrayImage) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width() as u32, image.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let bytes: Vec<u8> = image
        .data()
        .iter()
        .map(|&v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect();

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[inline]
fn luma_u8(px: &[u8]) -> f32 {
    (LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32) / 255.0
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}
