//! Sunrise Core - media and query logic for the Sunrise web front end
//!
//! This crate holds the parts of the front end that are plain computation:
//! shrinking uploaded images into clan avatars, building beatmapset search
//! queries, user privilege rules and the clan API payload types.

pub mod clan;
pub mod decode;
pub mod encode;
pub mod search;
pub mod user;

pub use encode::{encode_avatar, AvatarError, AvatarOptions, AvatarPayload};
pub use search::BeatmapsetSearchParams;
pub use user::{UserBadge, UserResponse};
