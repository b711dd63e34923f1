//! Types shared by the single-shot encoders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while encoding a bitmap.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec rejected the input
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed {
        format: &'static str,
        reason: String,
    },
}

/// Output format for encoded avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarFormat {
    /// Lossy WebP, alpha kept.
    #[default]
    Webp,
    /// Baseline JPEG, alpha flattened onto black.
    Jpeg,
}

impl AvatarFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            AvatarFormat::Webp => "image/webp",
            AvatarFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Check that an RGBA buffer matches its declared dimensions.
pub(crate) fn check_rgba_buffer(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(AvatarFormat::Webp.mime_type(), "image/webp");
        assert_eq!(AvatarFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(AvatarFormat::default(), AvatarFormat::Webp);
    }

    #[test]
    fn test_check_rgba_buffer() {
        assert!(check_rgba_buffer(&[0; 16], 2, 2).is_ok());
        assert!(matches!(
            check_rgba_buffer(&[0; 15], 2, 2),
            Err(EncodeError::InvalidPixelData {
                expected: 16,
                actual: 15
            })
        ));
        assert!(matches!(
            check_rgba_buffer(&[], 0, 2),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_format_serde_names() {
        let json = serde_json::to_string(&AvatarFormat::Jpeg).unwrap();
        assert_eq!(json, "\"jpeg\"");
        let parsed: AvatarFormat = serde_json::from_str("\"webp\"").unwrap();
        assert_eq!(parsed, AvatarFormat::Webp);
    }
}
