//! JPEG encoding for avatars.
//!
//! Uses the `image` crate's baseline JPEG encoder. JPEG has no alpha channel,
//! so transparent pixels are composited onto black, matching what a 2D
//! canvas produces for `toDataURL("image/jpeg")`.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::types::{check_rgba_buffer, EncodeError};

/// Encode RGBA pixel data to JPEG bytes.
///
/// `quality` is the usual 1-100 scale; out-of-range values are clamped.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    check_rgba_buffer(pixels, width, height)?;

    let rgb = flatten_onto_black(pixels);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "jpeg",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

/// Convert a quality fraction (0.0-1.0) to the JPEG 1-100 scale.
pub fn jpeg_quality(fraction: f32) -> u8 {
    (fraction * 100.0).round().clamp(1.0, 100.0) as u8
}

fn flatten_onto_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let alpha = u16::from(px[3]);
        for &channel in &px[..3] {
            rgb.push(((u16::from(channel) * alpha + 127) / 255) as u8);
        }
    }
    rgb
}
