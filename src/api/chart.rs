//! Exported chart functions

use wasm_bindgen::prelude::*;

use super::helpers::ensure_initialized;
use super::types::ValidationError;

/// Validate a chart and return it with canonical spacing
#[wasm_bindgen(js_name = validateChart)]
pub fn validate_chart(chart: &str) -> Result<String, ValidationError> {
    ensure_initialized();
    log::info!("validateChart called: {} bytes", chart.len());

    crate::validate_chart(chart).map_err(|err| {
        log::warn!("validateChart failed: {}", err);
        ValidationError::from(err)
    })
}

/// Transpose a chart from `current_key` to `new_key`
#[wasm_bindgen(js_name = transposeChart)]
pub fn transpose_chart(
    chart: &str,
    current_key: &str,
    new_key: &str,
) -> Result<String, ValidationError> {
    ensure_initialized();
    log::info!("transposeChart called: {} -> {}", current_key, new_key);

    crate::transpose_chart(chart, current_key, new_key).map_err(|err| {
        log::warn!("transposeChart failed: {}", err);
        ValidationError::from(err)
    })
}

/// Parse a chart into its structured document (lines, bars, chords)
#[wasm_bindgen(js_name = parseChart)]
pub fn parse_chart(chart: &str) -> Result<JsValue, JsValue> {
    ensure_initialized();
    log::info!("parseChart called: {} bytes", chart.len());

    let document = crate::parse::parse_chart(chart)
        .map_err(|err| JsValue::from(ValidationError::from(err)))?;

    serde_wasm_bindgen::to_value(&document).map_err(|e| {
        let msg = format!("Serialization error: {}", e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
