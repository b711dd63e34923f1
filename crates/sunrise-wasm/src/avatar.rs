//! Clan avatar encoding bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_clan_avatar } from '@sunrise/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! try {
//!   const avatar = encode_clan_avatar(bytes);
//!   await editClanAvatar({ avatar_url: avatar.dataUrl });
//! } catch (e) {
//!   toast(e.kind === 'oversized' ? t('avatarTooLarge') : t('avatarUnreadable'));
//! }
//! ```

use crate::types::{avatar_error_to_js, from_js_or_default, JsAvatarPayload};
use sunrise_core::encode::{self, AvatarError, AvatarOptions};
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Shrink an image file into a clan avatar data URL with the default budget
/// (2048 characters, WebP, 64px down to 16px).
///
/// # Errors
///
/// Throws an `Error` whose `kind` is `"decode"`, `"processing"` or `"oversized"`.
#[wasm_bindgen]
pub fn encode_clan_avatar(bytes: &[u8]) -> Result<JsAvatarPayload, JsValue> {
    run(bytes, &AvatarOptions::default())
}

/// Same as [`encode_clan_avatar`] with overrides.
///
/// `options` is a plain object with any of `max_length`, `sides`,
/// `qualities`, `format` (`"webp"` | `"jpeg"`) and `filter`; missing fields
/// keep their defaults.
#[wasm_bindgen]
pub fn encode_clan_avatar_with_options(
    bytes: &[u8],
    options: JsValue,
) -> Result<JsAvatarPayload, JsValue> {
    let options: AvatarOptions = from_js_or_default(options)?;
    run(bytes, &options)
}

fn run(bytes: &[u8], options: &AvatarOptions) -> Result<JsAvatarPayload, JsValue> {
    encode::encode_avatar(bytes, options)
        .map(JsAvatarPayload::from)
        .map_err(|err| {
            report(&err);
            avatar_error_to_js(&err)
        })
}

fn report(err: &AvatarError) {
    console::warn_1(&JsValue::from_str(&format!("[clan-avatar] {err}")));
}

/// Default maximum data URL length accepted by the avatar endpoint.
#[wasm_bindgen]
pub fn clan_avatar_max_length() -> usize {
    encode::CLAN_AVATAR_MAX_LENGTH
}


/// These call into JS (errors, console) and only run on wasm32.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_garbage_input_throws_decode_kind() {
        let err = match encode_clan_avatar(b"nope") {
            Err(err) => err,
            Ok(_) => panic!("expected an error"),
        };
        let kind = js_sys::Reflect::get(&err, &"kind".into()).unwrap();
        assert_eq!(kind.as_string().as_deref(), Some("decode"));
    }

    #[wasm_bindgen_test]
    fn test_empty_sides_is_processing_error() {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"sides".into(), &js_sys::Array::new()).unwrap();

        let err = match encode_clan_avatar_with_options(b"nope", options.into()) {
            Err(err) => err,
            Ok(_) => panic!("expected an error"),
        };
        let kind = js_sys::Reflect::get(&err, &"kind".into()).unwrap();
        assert_eq!(kind.as_string().as_deref(), Some("processing"));
    }
}
