//! Image encoding for uploads.
//!
//! This module provides functionality for:
//! - Shrinking an uploaded image into a clan avatar data URL under a length budget
//! - Encoding RGBA bitmaps to lossy WebP or JPEG
//! - Building and parsing base64 `data:` URLs
//!
//! # Examples
//!
//! ```ignore
//! use sunrise_core::encode::{encode_avatar, AvatarOptions};
//!
//! let bytes = std::fs::read("avatar.png").unwrap();
//! let payload = encode_avatar(&bytes, &AvatarOptions::default()).unwrap();
//! println!("{}x{} in {} chars", payload.width, payload.height, payload.len());
//! ```

mod avatar;
mod data_url;
mod jpeg;
mod types;
mod webp;

pub use avatar::{
    encode_avatar, encode_avatar_with, encode_decoded_avatar, AvatarCodec, AvatarError,
    AvatarOptions, AvatarPayload, DataUrlCodec, CLAN_AVATAR_MAX_LENGTH, CLAN_AVATAR_QUALITIES,
    CLAN_AVATAR_SIDES,
};
pub use data_url::{parse_data_url, to_data_url};
pub use jpeg::{encode_jpeg, jpeg_quality};
pub use types::{AvatarFormat, EncodeError};
pub use self::webp::encode_webp;
