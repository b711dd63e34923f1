//! Adaptive avatar encoding under a size budget.
//!
//! The search renders the source once per target side (largest first) and
//! tries every quality level (highest first) at that size. The first data URL
//! whose length fits the budget wins, so the result favours quality over the
//! smallest possible output. If nothing fits, the shortest candidate seen is
//! reported in the error.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::data_url::to_data_url;
use super::jpeg::{encode_jpeg, jpeg_quality};
use super::types::{AvatarFormat, EncodeError};
use super::webp::encode_webp;
use crate::decode::{decode_image, fit_within, resize, DecodeError, DecodedImage, FilterType};

/// Maximum data URL length the clan avatar endpoint accepts.
pub const CLAN_AVATAR_MAX_LENGTH: usize = 2048;

/// Target side lengths, largest first.
pub const CLAN_AVATAR_SIDES: [u32; 7] = [64, 56, 48, 40, 32, 24, 16];

/// Encoder quality fractions, highest first.
pub const CLAN_AVATAR_QUALITIES: [f32; 6] = [0.8, 0.7, 0.6, 0.5, 0.4, 0.3];

/// Errors from the avatar search. None of them are retried.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// The input could not be decoded as an image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    /// The bitmap could not be rendered or encoded.
    #[error("Failed to process image: {0}")]
    Processing(String),

    /// Every candidate exceeded the budget.
    #[error("Avatar too large: smallest candidate is {smallest} characters, limit is {max_length}")]
    Oversized { smallest: usize, max_length: usize },
}

impl From<EncodeError> for AvatarError {
    fn from(err: EncodeError) -> Self {
        AvatarError::Processing(err.to_string())
    }
}

impl AvatarError {
    /// Short machine-readable kind, used by the bindings.
    pub fn kind(&self) -> &'static str {
        match self {
            AvatarError::Decode(_) => "decode",
            AvatarError::Processing(_) => "processing",
            AvatarError::Oversized { .. } => "oversized",
        }
    }

    /// Message suitable for showing to the uploader.
    pub fn user_message(&self) -> &'static str {
        match self {
            AvatarError::Decode(_) | AvatarError::Processing(_) => {
                "This file could not be read as an image."
            }
            AvatarError::Oversized { .. } => {
                "This image is too detailed to shrink into an avatar. Try a simpler image."
            }
        }
    }
}

/// Search parameters for [`encode_avatar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarOptions {
    /// Inclusive maximum length of the data URL.
    pub max_length: usize,
    /// Target maximum side lengths, tried in order.
    pub sides: Vec<u32>,
    /// Quality fractions (0.0, 1.0], tried in order at every side.
    pub qualities: Vec<f32>,
    pub format: AvatarFormat,
    pub filter: FilterType,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            max_length: CLAN_AVATAR_MAX_LENGTH,
            sides: CLAN_AVATAR_SIDES.to_vec(),
            qualities: CLAN_AVATAR_QUALITIES.to_vec(),
            format: AvatarFormat::Webp,
            filter: FilterType::Bilinear,
        }
    }
}

impl AvatarOptions {
    /// Reject option sets the search cannot run with.
    pub fn validate(&self) -> Result<(), AvatarError> {
        if self.sides.is_empty() || self.qualities.is_empty() {
            return Err(AvatarError::Processing(
                "at least one side and one quality are required".to_string(),
            ));
        }
        if self.sides.contains(&0) {
            return Err(AvatarError::Processing("sides must be non-zero".to_string()));
        }
        if let Some(q) = self
            .qualities
            .iter()
            .find(|q| !(q.is_finite() && **q > 0.0 && **q <= 1.0))
        {
            return Err(AvatarError::Processing(format!(
                "quality {q} is outside (0, 1]"
            )));
        }
        Ok(())
    }
}

/// One encoded attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarPayload {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub quality: f32,
}

impl AvatarPayload {
    /// Length of the data URL, the quantity the budget applies to.
    pub fn len(&self) -> usize {
        self.data_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_url.is_empty()
    }

    pub fn into_data_url(self) -> String {
        self.data_url
    }
}

/// Turns a rendered bitmap into a data URL at a given quality.
pub trait AvatarCodec {
    fn encode(&self, image: &DecodedImage, quality: f32) -> Result<String, AvatarError>;
}

/// Production codec: encode with the configured format and wrap in a data URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlCodec {
    pub format: AvatarFormat,
}

impl DataUrlCodec {
    pub fn new(format: AvatarFormat) -> Self {
        Self { format }
    }
}

impl AvatarCodec for DataUrlCodec {
    fn encode(&self, image: &DecodedImage, quality: f32) -> Result<String, AvatarError> {
        let bytes = match self.format {
            AvatarFormat::Webp => encode_webp(&image.pixels, image.width, image.height, quality)?,
            AvatarFormat::Jpeg => encode_jpeg(
                &image.pixels,
                image.width,
                image.height,
                jpeg_quality(quality),
            )?,
        };
        Ok(to_data_url(self.format.mime_type(), &bytes))
    }
}

/// Decode `bytes` and shrink the result until it fits `options.max_length`.
pub fn encode_avatar(bytes: &[u8], options: &AvatarOptions) -> Result<AvatarPayload, AvatarError> {
    encode_avatar_with(bytes, options, &DataUrlCodec::new(options.format))
}

/// Same as [`encode_avatar`] with a caller-supplied codec.
///
/// Options are checked before the input is decoded.
pub fn encode_avatar_with<C: AvatarCodec + ?Sized>(
    bytes: &[u8],
    options: &AvatarOptions,
    codec: &C,
) -> Result<AvatarPayload, AvatarError> {
    options.validate()?;

    // The decoded bitmap lives only for this scope.
    let source = decode_image(bytes)?;
    debug!(
        width = source.width,
        height = source.height,
        "decoded avatar source"
    );
    search(&source, options, codec)
}

/// Run the search on an already decoded bitmap.
pub fn encode_decoded_avatar<C: AvatarCodec + ?Sized>(
    source: &DecodedImage,
    options: &AvatarOptions,
    codec: &C,
) -> Result<AvatarPayload, AvatarError> {
    options.validate()?;
    if source.is_empty() {
        return Err(DecodeError::EmptyImage {
            width: source.width,
            height: source.height,
        }
        .into());
    }
    search(source, options, codec)
}

/// Side-outer, quality-inner search over validated options.
fn search<C: AvatarCodec + ?Sized>(
    source: &DecodedImage,
    options: &AvatarOptions,
    codec: &C,
) -> Result<AvatarPayload, AvatarError> {
    let search: Step = options.sides.iter().try_fold(None, |smallest, &side| {
        search_side(source, side, options, codec, smallest)
    });

    match search {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(smallest) => settle(smallest, options.max_length),
    }
}

type Step = ControlFlow<Result<AvatarPayload, AvatarError>, Option<AvatarPayload>>;

/// Render at one side length and walk the quality list.
fn search_side<C: AvatarCodec + ?Sized>(
    source: &DecodedImage,
    side: u32,
    options: &AvatarOptions,
    codec: &C,
    smallest: Option<AvatarPayload>,
) -> Step {
    let (width, height) = fit_within(source.width, source.height, side);
    let canvas = match resize(source, width, height, options.filter) {
        Ok(canvas) => canvas,
        Err(e) => return ControlFlow::Break(Err(AvatarError::Processing(e.to_string()))),
    };

    options.qualities.iter().try_fold(smallest, |smallest, &quality| {
        let data_url = match codec.encode(&canvas, quality) {
            Ok(url) => url,
            Err(e) => return ControlFlow::Break(Err(e)),
        };
        let candidate = AvatarPayload {
            data_url,
            width,
            height,
            quality,
        };
        debug!(width, height, quality, len = candidate.len(), "avatar candidate");

        if candidate.len() <= options.max_length {
            info!(
                width,
                height,
                quality,
                len = candidate.len(),
                "avatar fits budget"
            );
            return ControlFlow::Break(Ok(candidate));
        }

        ControlFlow::Continue(Some(shorter(smallest, candidate)))
    })
}

/// Keep the earlier candidate on ties.
fn shorter(current: Option<AvatarPayload>, candidate: AvatarPayload) -> AvatarPayload {
    match current {
        Some(current) if current.len() <= candidate.len() => current,
        _ => candidate,
    }
}

fn settle(smallest: Option<AvatarPayload>, max_length: usize) -> Result<AvatarPayload, AvatarError> {
    match smallest {
        Some(candidate) if candidate.len() <= max_length => Ok(candidate),
        other => {
            let smallest = other.map_or(0, |c| c.len());
            warn!(smallest, max_length, "no avatar candidate fits budget");
            Err(AvatarError::Oversized {
                smallest,
                max_length,
            })
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    struct LengthCodec;

    impl AvatarCodec for LengthCodec {
        fn encode(&self, image: &DecodedImage, quality: f32) -> Result<String, AvatarError> {
            let len = (image.width * image.height) as f32 * quality;
            Ok("y".repeat(len as usize + 1))
        }
    }

    proptest! {
        /// A returned payload always fits and never exceeds the largest side.
        #[test]
        fn prop_result_fits_or_is_oversized(
            width in 1u32..=300,
            height in 1u32..=300,
            max_length in 1usize..=5000,
        ) {
            let image = DecodedImage::new(width, height, vec![200u8; (width * height * 4) as usize]);
            let options = AvatarOptions { max_length, ..AvatarOptions::default() };

            match encode_decoded_avatar(&image, &options, &LengthCodec) {
                Ok(payload) => {
                    prop_assert!(payload.len() <= max_length);
                    prop_assert!(payload.width <= 64 && payload.height <= 64);
                    prop_assert!(payload.width <= width && payload.height <= height);
                }
                Err(AvatarError::Oversized { smallest, .. }) => {
                    prop_assert!(smallest > max_length);
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
        }
    }
}
