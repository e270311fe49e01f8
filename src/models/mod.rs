//! Models module for the staff widget
//!
//! This module contains the note-name parser, accidentals and the
//! rendering options.

pub mod accidental;
pub mod note_name;
pub mod options;

// Re-export commonly used types
pub use accidental::Accidental;
pub use note_name::{extract_accidental, NoteName};
pub use options::{Backend, Clef, NoteDuration, StaffOptions};
