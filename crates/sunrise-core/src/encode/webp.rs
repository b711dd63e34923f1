//! Lossy WebP encoding via libwebp.

use super::types::{check_rgba_buffer, EncodeError};

/// Encode RGBA pixel data to lossy WebP bytes.
///
/// `quality` is a fraction in 0.0-1.0, the same scale a canvas takes for
/// `toDataURL`. Alpha is preserved.
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    check_rgba_buffer(pixels, width, height)?;

    let quality = (quality * 100.0).clamp(0.0, 100.0);
    let memory = webp::Encoder::from_rgba(pixels, width, height)
        .encode_simple(false, quality)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "webp",
            reason: format!("{e:?}"),
        })?;

    Ok(memory.to_vec())
}
