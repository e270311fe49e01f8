//! Renderers module for the staff widget
//!
//! This module contains the notation engine abstraction, the staff widget
//! built on top of it, and the two engines: VexFlow in the browser and an
//! in-memory scene for running without one.

pub mod engine;
pub mod scene;
pub mod staff;
pub mod vexflow;

// Re-export commonly used types
pub use engine::{NotationEngine, NoteSpec, StaveLayout};
pub use scene::{Scene, SceneEngine, SceneNode, SceneSurface};
pub use staff::StaffView;
pub use vexflow::VexFlow;
