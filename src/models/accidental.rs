//! Accidental representation
//!
//! Accidentals use the same textual encoding VexFlow expects for its
//! `Accidental` modifier, so the symbol can be forwarded unchanged.

use serde::{Deserialize, Serialize};

/// Pitch alteration attached to a note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Accidental {
    /// Sharp (#)
    Sharp,

    /// Double sharp (##)
    DoubleSharp,

    /// Flat (b)
    Flat,

    /// Double flat (bb)
    DoubleFlat,

    /// Explicit natural (n), cancels a prior alteration
    Natural,
}

impl Accidental {
    /// Get the symbol for this accidental
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
            Accidental::Natural => "n",
        }
    }

    /// Get the semitone offset for this accidental
    pub fn semitone_offset(&self) -> i8 {
        match self {
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
            Accidental::Natural => 0,
        }
    }

    /// Parse accidental from its symbol
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "#" => Some(Accidental::Sharp),
            "##" => Some(Accidental::DoubleSharp),
            "b" => Some(Accidental::Flat),
            "bb" => Some(Accidental::DoubleFlat),
            "n" => Some(Accidental::Natural),
            _ => None,
        }
    }
}

impl std::fmt::Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
