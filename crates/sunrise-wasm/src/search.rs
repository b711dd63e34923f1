//! Beatmapset search bindings.

use crate::types::from_js;
use sunrise_core::search::{self, BeatmapsetSearchParams};
use wasm_bindgen::prelude::*;

/// Build the `beatmapset/search` query string (without `?`) from
/// `{ query, limit, page, status, mode, search_by_custom_status }`.
#[wasm_bindgen]
pub fn build_beatmapset_search_query(params: JsValue) -> Result<String, JsValue> {
    let params: BeatmapsetSearchParams = from_js(params)?;
    Ok(params.to_query_string())
}

/// Map UI status labels (`"Ranked"`, `"Loved"`, ...) to API status numbers.
#[wasm_bindgen]
pub fn map_ui_statuses(labels: Vec<String>) -> Vec<i8> {
    search::map_ui_statuses(&labels)
}
