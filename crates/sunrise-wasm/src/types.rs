//! WASM-compatible wrapper types and conversions.

use serde::de::DeserializeOwned;
use sunrise_core::encode::{AvatarError, AvatarPayload};
use wasm_bindgen::prelude::*;

/// An encoded avatar handed back to JavaScript.
///
/// `dataUrl` can be placed directly into `{ avatar_url }` of the clan avatar
/// request body.
#[wasm_bindgen]
pub struct JsAvatarPayload {
    data_url: String,
    width: u32,
    height: u32,
    quality: f32,
}

#[wasm_bindgen]
impl JsAvatarPayload {
    #[wasm_bindgen(getter, js_name = dataUrl)]
    pub fn data_url(&self) -> String {
        self.data_url.clone()
    }

    /// Length of the data URL in characters.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.data_url.len()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Quality fraction the winning candidate was encoded at.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.quality
    }
}

impl From<AvatarPayload> for JsAvatarPayload {
    fn from(payload: AvatarPayload) -> Self {
        Self {
            width: payload.width,
            height: payload.height,
            quality: payload.quality,
            data_url: payload.data_url,
        }
    }
}

/// Deserialize a plain JS object, treating `undefined`/`null` as the default.
pub(crate) fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_js(value)
}

pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a JS `Error` carrying `kind` and `userMessage` so the UI can tell an
/// unreadable file from one that will not shrink enough.
pub(crate) fn avatar_error_to_js(err: &AvatarError) -> JsValue {
    let error = js_sys::Error::new(&err.to_string());
    error.set_name("AvatarError");
    let fields = [("kind", err.kind()), ("userMessage", err.user_message())];
    for (key, value) in fields {
        if let Err(e) = js_sys::Reflect::set(&error, &key.into(), &value.into()) {
            return e;
        }
    }
    error.into()
}
