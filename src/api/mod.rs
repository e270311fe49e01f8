//! Staff widget WASM API
//!
//! This module provides the JavaScript-facing API: the `Staff` class and the
//! note-name helpers.
//!
//! # Module Structure
//!
//! - `helpers`: Conversion between Rust values and `JsValue`, error logging
//! - `staff`: `Staff` class, `getAccidental`, `parseNoteName`

pub mod helpers;
pub mod staff;

pub use staff::{get_accidental, parse_note_name, Staff};
