//! Single-stave widget
//!
//! Draws one stave with a clef and, optionally, one note. The note is drawn
//! inside its own group so it can be removed again while the stave stays.

use crate::errors::StaffError;
use crate::models::{Backend, NoteName, StaffOptions};
use super::engine::{NotationEngine, NoteSpec, StaveLayout};

/// A stave with at most one note, drawn through a [`NotationEngine`]
pub struct StaffView<E: NotationEngine> {
    engine: E,
    renderer: E::Renderer,
    context: E::Context,
    stave: E::Stave,
    /// Present while the note is on screen; taken exactly once by `clear`
    note_group: Option<E::Group>,
}

impl<E: NotationEngine> StaffView<E> {
    /// Draw a treble stave `width` x `height` in `container`, plus `note_name`
    /// as a centered whole note when given
    pub fn new(
        engine: E,
        container: &E::Container,
        width: u32,
        height: u32,
        note_name: Option<&str>,
    ) -> Result<Self, StaffError> {
        Self::with_options(engine, container, width, height, note_name, &StaffOptions::default())
    }

    pub fn with_options(
        engine: E,
        container: &E::Container,
        width: u32,
        height: u32,
        note_name: Option<&str>,
        options: &StaffOptions,
    ) -> Result<Self, StaffError> {
        if width == 0 || height == 0 {
            return Err(StaffError::InvalidDimensions { width, height });
        }
        // Parse before drawing anything so a bad token leaves the container untouched.
        // An empty name means no note.
        let note = note_name
            .filter(|name| !name.is_empty())
            .map(NoteName::parse)
            .transpose()?;

        // Only the SVG backend has removable groups
        if note.is_some() && options.backend != Backend::Svg {
            return Err(StaffError::InvalidOptions(format!(
                "a note needs the svg backend, got {:?}",
                options.backend
            )));
        }

        log::debug!(
            "Creating staff {}x{} (clef={}, note={:?})",
            width,
            height,
            options.clef.name(),
            note.as_ref().map(NoteName::key)
        );

        let mut renderer = engine.create_renderer(container, options.backend)?;
        engine.resize(&mut renderer, width, height)?;
        let mut context = engine.context(&renderer)?;

        let layout = StaveLayout {
            x: 0.0,
            y: options.stave_y,
            width: f64::from(width) - 1.0,
        };
        let stave = engine.draw_stave(&mut context, layout, options.clef)?;

        let note_group = match note {
            Some(note) => Some(Self::draw_note(&engine, &mut context, &stave, &note, options)?),
            None => None,
        };

        Ok(Self {
            engine,
            renderer,
            context,
            stave,
            note_group,
        })
    }

    fn draw_note(
        engine: &E,
        context: &mut E::Context,
        stave: &E::Stave,
        note: &NoteName,
        options: &StaffOptions,
    ) -> Result<E::Group, StaffError> {
        let spec = NoteSpec {
            keys: vec![note.key().to_string()],
            duration: options.duration,
            align_center: options.align_center,
        };
        let mut staff_note = engine.create_note(stave, &spec)?;

        if let Some(accidental) = note.accidental {
            engine.add_accidental(&mut staff_note, accidental)?;
        }

        let group = engine.open_group(context)?;
        engine.format_and_draw(context, stave, std::slice::from_ref(&staff_note))?;
        engine.close_group(context)?;

        Ok(group)
    }

    /// Remove the drawn note, keeping the stave. No-op when there is no note.
    pub fn clear(&mut self) -> Result<(), StaffError> {
        match self.note_group.take() {
            Some(group) => {
                log::debug!("Removing note group");
                self.engine.remove_group(&mut self.context, group)
            }
            None => {
                log::debug!("No note group to remove");
                Ok(())
            }
        }
    }

    /// Whether a note is currently drawn
    pub fn has_note(&self) -> bool {
        self.note_group.is_some()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn renderer(&self) -> &E::Renderer {
        &self.renderer
    }

    pub fn context(&self) -> &E::Context {
        &self.context
    }

    pub fn stave(&self) -> &E::Stave {
        &self.stave
    }
}
