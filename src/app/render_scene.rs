//! Baut die Render-Szene aus dem aktuellen AppState.

use std::sync::Arc;

use crate::app::AppState;
use crate::shared::RenderScene;

/// Erstellt einen read-only Frame-Snapshot für den Renderer.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        sketch: Arc::clone(&state.sketch),
        selected_point_ids: state.selection.selected_point_ids.clone(),
        selected_line_ids: state.selection.selected_line_ids.clone(),
        selected_angle_ids: state.selection.selected_angle_ids.clone(),
        circle_selected: state.selection.circle_selected,
        active_point_id: state.editor.active_point_id,
        first_angle_line_id: state.editor.first_angle_line_id,
        drag_preview: state.editor.drag_preview,
        options: state.options.clone(),
        revision: state.revision,
    }
}
