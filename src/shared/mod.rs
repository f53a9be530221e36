//! Gemeinsame Verträge zwischen App-Layer und (externem) Renderer.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{PointDragPreview, RenderScene};
