//! Notation engine abstraction
//!
//! The staff widget never reaches for a global rendering library. Instead it
//! is handed a [`NotationEngine`], which exposes just the primitives the
//! widget needs: a renderer bound to a container, a drawing context with
//! named groups, a stave with a clef, a note with an accidental modifier and
//! a formatter. [`super::vexflow::VexFlow`] drives the real library in the
//! browser; [`super::scene::SceneEngine`] records the same calls in memory.

use crate::errors::StaffError;
use crate::models::{Accidental, Backend, Clef, NoteDuration};

/// Position and extent of a stave
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaveLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Description of a single note to build on a stave
#[derive(Clone, Debug, PartialEq)]
pub struct NoteSpec {
    pub keys: Vec<String>,
    pub duration: NoteDuration,
    pub align_center: bool,
}

/// Rendering primitives consumed by the staff widget
pub trait NotationEngine {
    /// Surface the renderer is attached to (a DOM element in the browser)
    type Container: ?Sized;
    type Renderer;
    type Context;
    type Stave;
    type Note;
    /// Handle to a group of drawn elements that can be removed later
    type Group;

    fn create_renderer(
        &self,
        container: &Self::Container,
        backend: Backend,
    ) -> Result<Self::Renderer, StaffError>;

    fn resize(&self, renderer: &mut Self::Renderer, width: u32, height: u32) -> Result<(), StaffError>;

    fn context(&self, renderer: &Self::Renderer) -> Result<Self::Context, StaffError>;

    /// Create a stave, attach `clef` and draw it on `context`
    fn draw_stave(
        &self,
        context: &mut Self::Context,
        layout: StaveLayout,
        clef: Clef,
    ) -> Result<Self::Stave, StaffError>;

    /// Build a note bound to `stave`, without drawing it
    fn create_note(&self, stave: &Self::Stave, spec: &NoteSpec) -> Result<Self::Note, StaffError>;

    fn add_accidental(&self, note: &mut Self::Note, accidental: Accidental) -> Result<(), StaffError>;

    fn open_group(&self, context: &mut Self::Context) -> Result<Self::Group, StaffError>;

    fn close_group(&self, context: &mut Self::Context) -> Result<(), StaffError>;

    /// Lay out `notes` on `stave` and draw them
    fn format_and_draw(
        &self,
        context: &mut Self::Context,
        stave: &Self::Stave,
        notes: &[Self::Note],
    ) -> Result<(), StaffError>;

    /// Remove a previously drawn group from the drawing surface
    fn remove_group(&self, context: &mut Self::Context, group: Self::Group) -> Result<(), StaffError>;
}
