//! User privilege bindings.
//!
//! Each function takes the user object exactly as the API returned it.

use crate::types::from_js;
use sunrise_core::user::UserResponse;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn can_use_admin_panel(user: JsValue) -> Result<bool, JsValue> {
    Ok(from_js::<UserResponse>(user)?.can_use_admin_panel())
}

#[wasm_bindgen]
pub fn can_use_admin_user_search(user: JsValue) -> Result<bool, JsValue> {
    Ok(from_js::<UserResponse>(user)?.can_use_admin_user_search())
}

/// The user's custom nickname colour, or `undefined` when it should not be shown.
#[wasm_bindgen]
pub fn supporter_nickname_color(user: JsValue) -> Result<Option<String>, JsValue> {
    let user: UserResponse = from_js(user)?;
    Ok(user.supporter_nickname_color().map(str::to_owned))
}
