//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use selection::SelectionState;
