//! Shared helpers for WASM API operations
//!
//! Conversion between Rust values and `JsValue`, with errors logged before
//! they cross the boundary.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StaffError;

/// Log a staff error and convert it to a JsValue
pub fn to_js_error(err: StaffError) -> JsValue {
    log::error!("{}", err);
    JsValue::from(err)
}

/// Deserialize an optional options object from JavaScript
///
/// `undefined` and `null` yield `T::default()`.
pub fn deserialize_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, StaffError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| StaffError::InvalidOptions(e.to_string()))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
