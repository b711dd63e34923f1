//! Sunrise WASM - WebAssembly bindings for the Sunrise web front end
//!
//! # Module Structure
//!
//! - `avatar` - Clan avatar shrinking (file bytes in, data URL out)
//! - `search` - Beatmapset search query building
//! - `user` - Badge-based privilege checks and supporter colours
//! - `types` - JS-facing wrapper types and conversions
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_clan_avatar } from '@sunrise/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const avatar = encode_clan_avatar(bytes);
//! console.log(`${avatar.width}x${avatar.height}, ${avatar.length} chars`);
//! ```

use wasm_bindgen::prelude::*;

mod avatar;
mod search;
mod types;
mod user;

pub use avatar::{clan_avatar_max_length, encode_clan_avatar, encode_clan_avatar_with_options};
pub use search::{build_beatmapset_search_query, map_ui_statuses};
pub use types::JsAvatarPayload;
pub use user::{can_use_admin_panel, can_use_admin_user_search, supporter_nickname_color};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
