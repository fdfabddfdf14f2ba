//! WASM bindings for in-browser saga parsing.
//!
//! The host page is responsible for fetching the HTML (typically through a
//! same-origin proxy); these functions only transform text and return JSON
//! strings.

use wasm_bindgen::prelude::*;

use crate::{analysis, parser};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse saga HTML into its chapter/sentence mapping, as a JSON string.
#[wasm_bindgen]
pub fn parse_chapters(html: &str) -> Result<String, JsValue> {
    serde_json::to_string(&parser::parse(html)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Cross-reference spelled-out number words with chapters, as a JSON string.
#[wasm_bindgen]
pub fn find_number_mentions(html: &str) -> Result<String, JsValue> {
    serde_json::to_string(&analysis::analyze(html)).map_err(|e| JsValue::from_str(&e.to_string()))
}
