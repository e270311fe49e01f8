//! Staff Widget WASM Module
//!
//! Renders a single stave with at most one note through VexFlow inside a web
//! page element. The rendering library is injected, which keeps the widget
//! usable (and testable) with the in-memory scene engine as well.

pub mod api;
pub mod errors;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use api::Staff;
pub use errors::StaffError;
pub use models::{extract_accidental, Accidental, NoteName, StaffOptions};
pub use renderers::{NotationEngine, SceneEngine, SceneSurface, StaffView, VexFlow};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Staff widget WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
