//! WASM API for the staff widget
//!
//! ```js
//! import { Staff, getAccidental } from "staff-wasm";
//!
//! const staff = new Staff(Vex.Flow, document.getElementById("staff"), 200, 120, "C#/4");
//! staff.clear();   // removes the note, keeps the stave
//! getAccidental("Eb/3"); // "b"
//! ```

use wasm_bindgen::prelude::*;

use crate::models::{extract_accidental, NoteName, StaffOptions};
use crate::renderers::{StaffView, VexFlow};
use super::helpers::{deserialize_or_default, serialize, to_js_error};

/// A VexFlow stave with at most one note, drawn into a DOM element
#[wasm_bindgen]
pub struct Staff {
    view: StaffView<VexFlow>,
}

#[wasm_bindgen]
impl Staff {
    /// Draw a treble stave in `parent` and, when `note_name` is given, a
    /// centered whole note with its accidental
    #[wasm_bindgen(constructor)]
    pub fn new(
        flow: JsValue,
        parent: web_sys::Element,
        width: u32,
        height: u32,
        note_name: Option<String>,
    ) -> Result<Staff, JsValue> {
        Self::build(flow, &parent, width, height, note_name, StaffOptions::default())
    }

    /// Same as the constructor, with a `StaffOptions` object
    /// (`{ clef, duration, backend, alignCenter, staveY }`, all optional)
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        flow: JsValue,
        parent: web_sys::Element,
        width: u32,
        height: u32,
        note_name: Option<String>,
        options: JsValue,
    ) -> Result<Staff, JsValue> {
        let options: StaffOptions = deserialize_or_default(options).map_err(to_js_error)?;
        Self::build(flow, &parent, width, height, note_name, options)
    }

    /// Remove the drawn note while keeping the stave; no-op without a note
    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.view.clear().map_err(to_js_error)
    }

    #[wasm_bindgen(getter, js_name = hasNote)]
    pub fn has_note(&self) -> bool {
        self.view.has_note()
    }
}

impl Staff {
    fn build(
        flow: JsValue,
        parent: &web_sys::Element,
        width: u32,
        height: u32,
        note_name: Option<String>,
        options: StaffOptions,
    ) -> Result<Staff, JsValue> {
        let engine = VexFlow::new(flow).map_err(to_js_error)?;
        let view = StaffView::with_options(engine, parent, width, height, note_name.as_deref(), &options)
            .map_err(to_js_error)?;

        log::info!("Staff created ({}x{}, note: {})", width, height, view.has_note());
        Ok(Staff { view })
    }
}

/// Accidental of a note name (`"#"`, `"##"`, `"b"`, `"bb"`, `"n"`), or
/// `undefined` when it has none. Throws for a malformed note name.
#[wasm_bindgen(js_name = getAccidental)]
pub fn get_accidental(note_name: &str) -> Result<Option<String>, JsValue> {
    let accidental = extract_accidental(note_name).map_err(to_js_error)?;
    Ok(accidental.map(|a| a.symbol().to_string()))
}

/// Parse a note name into `{ letter, accidental, key }`
#[wasm_bindgen(js_name = parseNoteName)]
pub fn parse_note_name(note_name: &str) -> Result<JsValue, JsValue> {
    let parsed = NoteName::parse(note_name).map_err(to_js_error)?;
    serialize(&parsed, "Failed to serialize note name")
}
