//! Error types for staff rendering
//!
//! Every fallible operation in the crate returns [`StaffError`]. At the WASM
//! boundary it is converted into a `JsValue` carrying the display message.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for note parsing and staff rendering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StaffError {
    /// Note name does not start with a letter A-G
    #[error("Invalid note name '{0}': expected a letter A-G, optionally followed by #, ##, b, bb or n")]
    InvalidNoteName(String),

    /// Renderer cannot be sized to an empty surface
    #[error("Invalid staff dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Options object could not be read
    #[error("Invalid staff options: {0}")]
    InvalidOptions(String),

    /// A call into the notation engine failed
    #[error("Notation engine call '{operation}' failed: {message}")]
    Engine { operation: String, message: String },
}

impl StaffError {
    pub fn engine(operation: &str, message: impl Into<String>) -> Self {
        StaffError::Engine {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

impl From<StaffError> for JsValue {
    fn from(err: StaffError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
