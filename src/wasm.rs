//! WASM bindings for orgchart-layout.
//!
//! Exposes `layout` and `layoutWithConfig` to JavaScript via wasm-bindgen so
//! the chart can be computed inside a web worker.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;

/// Lay out a `{employees, relationships}` JSON payload with default settings.
#[wasm_bindgen]
pub fn layout(payload: &str) -> Result<String, JsError> {
    crate::compute_layout_json(payload, &LayoutConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a payload with a JSON-encoded `LayoutConfig` (camelCase keys,
/// missing keys take their defaults; an empty string means all defaults).
#[wasm_bindgen(js_name = "layoutWithConfig")]
pub fn layout_with_config(payload: &str, config: &str) -> Result<String, JsError> {
    let config: LayoutConfig = if config.trim().is_empty() {
        LayoutConfig::default()
    } else {
        serde_json::from_str(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    crate::compute_layout_json(payload, &config).map_err(|e| JsError::new(&e.to_string()))
}
