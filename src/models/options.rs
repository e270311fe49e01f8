//! Staff rendering options
//!
//! Every field has a default, so `{}` (or no options object at all) renders
//! a treble stave with a centered whole note on an SVG backend.

use serde::{Deserialize, Serialize};

/// Clef drawn at the start of the stave
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    #[default]
    Treble,
    Bass,
    Alto,
    Tenor,
}

impl Clef {
    /// Clef name as understood by VexFlow's `Stave.addClef`
    pub fn name(&self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
            Clef::Alto => "alto",
            Clef::Tenor => "tenor",
        }
    }
}

/// Note duration
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NoteDuration {
    #[default]
    #[serde(rename = "w")]
    Whole,
    #[serde(rename = "h")]
    Half,
    #[serde(rename = "q")]
    Quarter,
    #[serde(rename = "8")]
    Eighth,
}

impl NoteDuration {
    /// Duration code as understood by VexFlow's `StaveNote`
    pub fn code(&self) -> &'static str {
        match self {
            NoteDuration::Whole => "w",
            NoteDuration::Half => "h",
            NoteDuration::Quarter => "q",
            NoteDuration::Eighth => "8",
        }
    }
}

/// Renderer output backend
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Svg,
    Canvas,
}

impl Backend {
    /// Key under `Renderer.Backends`
    pub fn key(&self) -> &'static str {
        match self {
            Backend::Svg => "SVG",
            Backend::Canvas => "CANVAS",
        }
    }
}

/// Options for a staff widget
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StaffOptions {
    pub clef: Clef,
    pub duration: NoteDuration,
    pub backend: Backend,
    pub align_center: bool,
    /// Vertical offset of the stave's top line area
    pub stave_y: f64,
}

impl Default for StaffOptions {
    fn default() -> Self {
        Self {
            clef: Clef::Treble,
            duration: NoteDuration::Whole,
            backend: Backend::Svg,
            align_center: true,
            stave_y: 0.0,
        }
    }
}
