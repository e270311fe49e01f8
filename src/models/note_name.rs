//! Note-name tokens
//!
//! A note name is a token of the form `<letter A-G>[accidental][/<octave>]`,
//! e.g. `C/4`, `F#/5`, `Bbb/3` or `Dn/5`. Only the letter and the accidental
//! are interpreted here. The full token is kept as the key handed to the
//! notation engine, so the octave part is passed through untouched.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::accidental::Accidental;
use crate::errors::StaffError;

lazy_static! {
    static ref NOTE_ACCIDENTAL_RE: Regex =
        Regex::new(r"^([A-G])(#{1,2}|b{1,2}|n)?").expect("note name pattern is valid");
}

/// A parsed note-name token
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NoteName {
    /// White key letter (A-G)
    pub letter: char,

    /// Accidental following the letter, if any
    pub accidental: Option<Accidental>,

    /// Original token, used verbatim as the engine key
    pub key: String,
}

impl NoteName {
    /// Parse a note-name token
    ///
    /// Matching is anchored at the start of the token and only the first
    /// letter+accidental run is considered.
    pub fn parse(token: &str) -> Result<Self, StaffError> {
        let caps = NOTE_ACCIDENTAL_RE
            .captures(token)
            .ok_or_else(|| StaffError::InvalidNoteName(token.to_string()))?;

        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .ok_or_else(|| StaffError::InvalidNoteName(token.to_string()))?;

        let accidental = caps.get(2).and_then(|m| Accidental::parse(m.as_str()));

        Ok(NoteName {
            letter,
            accidental,
            key: token.to_string(),
        })
    }

    /// Build a token from its parts, e.g. (`C`, sharp, 4) -> `C#/4`
    pub fn from_parts(
        letter: char,
        accidental: Option<Accidental>,
        octave: i32,
    ) -> Result<Self, StaffError> {
        let letter = letter.to_ascii_uppercase();
        let key = format!(
            "{}{}/{}",
            letter,
            accidental.map(|a| a.symbol()).unwrap_or(""),
            octave
        );
        if !('A'..='G').contains(&letter) {
            return Err(StaffError::InvalidNoteName(key));
        }

        Ok(NoteName {
            letter,
            accidental,
            key,
        })
    }

    /// Key to hand to the notation engine
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key)
    }
}

impl std::str::FromStr for NoteName {
    type Err = StaffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::parse(s)
    }
}

/// Extract the accidental from a note-name token
///
/// Returns `Ok(None)` when the token has no accidental and an
/// [`StaffError::InvalidNoteName`] when it does not start with A-G.
///
/// ```
/// use staff_wasm::models::{extract_accidental, Accidental};
///
/// assert_eq!(extract_accidental("C/4").unwrap(), None);
/// assert_eq!(extract_accidental("C##/4").unwrap(), Some(Accidental::DoubleSharp));
/// assert_eq!(extract_accidental("Dn/5").unwrap(), Some(Accidental::Natural));
/// assert!(extract_accidental("9/4").is_err());
/// ```
pub fn extract_accidental(token: &str) -> Result<Option<Accidental>, StaffError> {
    NoteName::parse(token).map(|name| name.accidental)
}
