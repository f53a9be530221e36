//! Use-Case: Punkte verschieben (direkt, per Drag-Vorschau, als Selektion).

use glam::DVec2;

use crate::app::AppState;
use crate::shared::PointDragPreview;

/// Setzt die Position eines Punkts und rechnet abhängige Winkel neu.
pub fn update_point_position(state: &mut AppState, point_id: u64, position: DVec2) {
    if !state.sketch_mut().update_point_position(point_id, position) {
        log::warn!("Punkt {} nicht gefunden", point_id);
    }
}

/// Beginnt ein Punkt-Drag: legt das Vorschau-Overlay an.
pub fn begin_point_drag(state: &mut AppState, point_id: u64) {
    let Some(point) = state.sketch.point(point_id) else {
        log::warn!("Drag auf unbekannten Punkt {}", point_id);
        return;
    };

    state.editor.drag_preview = Some(PointDragPreview {
        point_id,
        position: point.position,
    });
}

/// Aktualisiert die Vorschau-Position des laufenden Drags.
pub fn update_point_drag(state: &mut AppState, position: DVec2) {
    if let Some(preview) = state.editor.drag_preview.as_mut() {
        preview.position = position;
    }
}

/// Beendet das Drag und committet die Vorschau-Position in den Sketch.
pub fn end_point_drag(state: &mut AppState) {
    if let Some(preview) = state.editor.drag_preview.take() {
        update_point_position(state, preview.point_id, preview.position);
    }
}

/// Escape während des Drags: Overlay verwerfen, Sketch bleibt unberührt.
pub fn cancel_point_drag(state: &mut AppState) {
    if state.editor.drag_preview.take().is_some() {
        log::debug!("Punkt-Drag abgebrochen");
    }
}

/// Verschiebt alle selektierten Punkte um den gegebenen Canvas-Offset.
pub fn move_selected_points(state: &mut AppState, delta: DVec2) {
    if delta == DVec2::ZERO {
        return;
    }
    if state.selection.selected_point_ids.is_empty() {
        return;
    }

    let ids: Vec<u64> = state.selection.selected_point_ids.iter().copied().collect();
    state.sketch_mut().translate_points(&ids, delta);
}
