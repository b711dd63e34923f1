//! Image decoding for user uploads.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG, WebP and GIF files into an RGBA bitmap
//! - Applying EXIF orientation the way browsers do for `createImageBitmap`
//! - Computing aspect-preserving target sizes and resizing
//!
//! All operations are synchronous and single-threaded; a decoded bitmap is
//! owned by its caller and released on drop.

mod resize;
mod source;
mod types;

#[cfg(test)]
pub(crate) use source::fixtures;

pub use resize::{fit_within, resize, resize_to_fit};
pub use source::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
