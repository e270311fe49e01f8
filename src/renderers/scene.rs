//! In-memory notation engine
//!
//! [`SceneEngine`] implements [`NotationEngine`] without a browser. Instead of
//! producing SVG it accumulates a tree of [`SceneNode`]s on a shared
//! [`SceneSurface`], which plays the role of the container element. Groups
//! opened on the context nest the nodes drawn until they are closed, and can
//! be removed again just like an SVG `<g>` element.

use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::errors::StaffError;
use crate::models::{Accidental, Backend, Clef, NoteDuration};
use super::engine::{NotationEngine, NoteSpec, StaveLayout};

/// A drawn element
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SceneNode {
    Stave {
        x: f64,
        y: f64,
        width: f64,
        clef: Clef,
    },
    #[serde(rename_all = "camelCase")]
    Note {
        keys: Vec<String>,
        duration: NoteDuration,
        align_center: bool,
        accidentals: Vec<Accidental>,
    },
    Group {
        id: u32,
        children: Vec<SceneNode>,
    },
}

impl SceneNode {
    fn visit<'a>(&'a self, out: &mut Vec<&'a SceneNode>) {
        out.push(self);
        if let SceneNode::Group { children, .. } = self {
            for child in children {
                child.visit(out);
            }
        }
    }
}

/// Everything drawn on a surface
#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub backend: Option<Backend>,
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<SceneNode>,

    #[serde(skip)]
    open_groups: Vec<(u32, Vec<SceneNode>)>,

    #[serde(skip)]
    next_group_id: u32,
}

impl Scene {
    fn push(&mut self, node: SceneNode) {
        match self.open_groups.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.nodes.push(node),
        }
    }

    /// All nodes, depth first
    pub fn all_nodes(&self) -> Vec<&SceneNode> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.visit(&mut out);
        }
        out
    }

    pub fn stave_count(&self) -> usize {
        self.all_nodes()
            .into_iter()
            .filter(|n| matches!(n, SceneNode::Stave { .. }))
            .count()
    }

    pub fn note_count(&self) -> usize {
        self.all_nodes()
            .into_iter()
            .filter(|n| matches!(n, SceneNode::Note { .. }))
            .count()
    }

    /// Ids of the groups drawn at the top level
    pub fn group_ids(&self) -> Vec<u32> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Group { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Number of groups opened but not yet closed
    pub fn open_group_depth(&self) -> usize {
        self.open_groups.len()
    }
}

/// Shared handle to a [`Scene`], standing in for a container element
#[derive(Clone, Debug, Default)]
pub struct SceneSurface {
    scene: Rc<RefCell<Scene>>,
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> Ref<'_, Scene> {
        self.scene.borrow()
    }

    /// Dump the scene as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, StaffError> {
        serde_json::to_string_pretty(&*self.scene.borrow())
            .map_err(|e| StaffError::engine("toJson", e.to_string()))
    }
}

/// Stave handle returned by [`SceneEngine::draw_stave`]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStave {
    pub layout: StaveLayout,
    pub clef: Clef,
}

/// Note handle, not yet drawn
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNote {
    pub spec: NoteSpec,
    pub stave: StaveLayout,
    pub accidentals: Vec<Accidental>,
}

/// Group handle
#[derive(Debug, PartialEq, Eq)]
pub struct SceneGroup(u32);

impl SceneGroup {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Notation engine drawing into a [`SceneSurface`]
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneEngine;

impl NotationEngine for SceneEngine {
    type Container = SceneSurface;
    type Renderer = SceneSurface;
    type Context = SceneSurface;
    type Stave = SceneStave;
    type Note = SceneNote;
    type Group = SceneGroup;

    fn create_renderer(&self, container: &SceneSurface, backend: Backend) -> Result<SceneSurface, StaffError> {
        let mut scene = container.scene.borrow_mut();
        if scene.backend.is_some() {
            return Err(StaffError::engine("Renderer", "surface already has a renderer"));
        }
        scene.backend = Some(backend);
        Ok(container.clone())
    }

    fn resize(&self, renderer: &mut SceneSurface, width: u32, height: u32) -> Result<(), StaffError> {
        let mut scene = renderer.scene.borrow_mut();
        scene.width = width;
        scene.height = height;
        Ok(())
    }

    fn context(&self, renderer: &SceneSurface) -> Result<SceneSurface, StaffError> {
        Ok(renderer.clone())
    }

    fn draw_stave(&self, context: &mut SceneSurface, layout: StaveLayout, clef: Clef) -> Result<SceneStave, StaffError> {
        context.scene.borrow_mut().push(SceneNode::Stave {
            x: layout.x,
            y: layout.y,
            width: layout.width,
            clef,
        });
        Ok(SceneStave { layout, clef })
    }

    fn create_note(&self, stave: &SceneStave, spec: &NoteSpec) -> Result<SceneNote, StaffError> {
        if spec.keys.is_empty() {
            return Err(StaffError::engine("StaveNote", "note needs at least one key"));
        }
        Ok(SceneNote {
            spec: spec.clone(),
            stave: stave.layout,
            accidentals: Vec::new(),
        })
    }

    fn add_accidental(&self, note: &mut SceneNote, accidental: Accidental) -> Result<(), StaffError> {
        note.accidentals.push(accidental);
        Ok(())
    }

    fn open_group(&self, context: &mut SceneSurface) -> Result<SceneGroup, StaffError> {
        let mut scene = context.scene.borrow_mut();
        scene.next_group_id += 1;
        let id = scene.next_group_id;
        scene.open_groups.push((id, Vec::new()));
        Ok(SceneGroup(id))
    }

    fn close_group(&self, context: &mut SceneSurface) -> Result<(), StaffError> {
        let mut scene = context.scene.borrow_mut();
        let (id, children) = scene
            .open_groups
            .pop()
            .ok_or_else(|| StaffError::engine("closeGroup", "no open group"))?;
        scene.push(SceneNode::Group { id, children });
        Ok(())
    }

    fn format_and_draw(
        &self,
        context: &mut SceneSurface,
        stave: &SceneStave,
        notes: &[SceneNote],
    ) -> Result<(), StaffError> {
        let mut scene = context.scene.borrow_mut();
        for note in notes {
            if note.stave != stave.layout {
                return Err(StaffError::engine("FormatAndDraw", "note is bound to another stave"));
            }
            scene.push(SceneNode::Note {
                keys: note.spec.keys.clone(),
                duration: note.spec.duration,
                align_center: note.spec.align_center,
                accidentals: note.accidentals.clone(),
            });
        }
        Ok(())
    }

    fn remove_group(&self, context: &mut SceneSurface, group: SceneGroup) -> Result<(), StaffError> {
        let mut scene = context.scene.borrow_mut();
        let index = scene
            .nodes
            .iter()
            .position(|n| matches!(n, SceneNode::Group { id, .. } if *id == group.0))
            .ok_or_else(|| {
                StaffError::engine("removeChild", format!("group {} is not on the surface", group.0))
            })?;
        scene.nodes.remove(index);
        Ok(())
    }
}
