//! Handler für Sketch-Editing und Editor-Werkzeug.

use glam::DVec2;

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ResizeHandle;

/// Aktiviert ein Editor-Werkzeug und räumt den Zustand des Vorgängers auf.
///
/// Beim Verlassen des Marker-Tools wird der aktive Punkt verworfen und ein
/// Orphan-Sweep ausgeführt (ein gesetzter, nie verbundener Punkt
/// verschwindet). Beim Verlassen des Winkel-Tools fällt die erste Linie.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    let previous = state.editor.active_tool;
    if previous == tool {
        return;
    }

    state.editor.active_tool = tool;
    state.editor.drag_preview = None;

    match previous {
        EditorTool::Marker => {
            state.editor.active_point_id = None;
            let summary = state.sketch_mut().sweep_orphans();
            if !summary.is_empty() {
                log::debug!("{} Orphan-Punkt(e) nach Tool-Wechsel entfernt", summary.points.len());
                state.prune_removed(&summary);
            }
        }
        EditorTool::Angle => {
            state.editor.first_angle_line_id = None;
        }
        _ => {}
    }

    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Verarbeitet einen Marker-Tool-Klick.
pub fn marker_tool_click(state: &mut AppState, position: DVec2) {
    use_cases::editing::marker_tool_click(state, position);
}

/// Verarbeitet einen Kreis-Tool-Klick.
pub fn circle_tool_click(state: &mut AppState, position: DVec2) {
    use_cases::editing::circle_tool_click(state, position);
}

/// Verarbeitet einen Winkel-Tool-Linienklick.
pub fn angle_tool_line_click(state: &mut AppState, line_id: u64) {
    use_cases::editing::angle_tool_line_click(state, line_id);
}

/// Fügt einen freien Punkt an der Position hinzu.
pub fn add_point(state: &mut AppState, position: DVec2) {
    use_cases::editing::add_point_at_position(state, position);
}

/// Setzt die Position eines Punkts direkt.
pub fn update_point_position(state: &mut AppState, point_id: u64, position: DVec2) {
    use_cases::editing::update_point_position(state, point_id, position);
}

/// Beginnt die Drag-Vorschau für einen Punkt.
pub fn begin_point_drag(state: &mut AppState, point_id: u64) {
    use_cases::editing::begin_point_drag(state, point_id);
}

/// Aktualisiert die Drag-Vorschau.
pub fn update_point_drag(state: &mut AppState, position: DVec2) {
    use_cases::editing::update_point_drag(state, position);
}

/// Committet die Drag-Vorschau in den Sketch.
pub fn end_point_drag(state: &mut AppState) {
    use_cases::editing::end_point_drag(state);
}

/// Verwirft die Drag-Vorschau.
pub fn cancel_point_drag(state: &mut AppState) {
    use_cases::editing::cancel_point_drag(state);
}

/// Verschiebt alle selektierten Punkte um ein Delta.
pub fn move_selected_points(state: &mut AppState, delta: DVec2) {
    use_cases::editing::move_selected_points(state, delta);
}

/// Verschiebt den Referenzkreis.
pub fn move_circle(state: &mut AppState, delta: DVec2) {
    use_cases::editing::move_circle(state, delta);
}

/// Skaliert den Referenzkreis über ein Handle.
pub fn resize_circle(state: &mut AppState, handle: ResizeHandle, pointer: DVec2) {
    use_cases::editing::resize_circle(state, handle, pointer);
}

/// Löscht einen Punkt.
pub fn delete_point(state: &mut AppState, point_id: u64) {
    use_cases::editing::delete_point(state, point_id);
}

/// Löscht eine Linie.
pub fn delete_line(state: &mut AppState, line_id: u64) {
    use_cases::editing::delete_line(state, line_id);
}

/// Löscht einen Winkel.
pub fn delete_angle(state: &mut AppState, angle_id: u64) {
    use_cases::editing::delete_angle(state, angle_id);
}

/// Löscht den Referenzkreis.
pub fn delete_circle(state: &mut AppState) {
    use_cases::editing::delete_circle(state);
}

/// Löscht alle selektierten Entitäten.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Setzt den gesamten Sketch zurück.
pub fn clear_all(state: &mut AppState) {
    use_cases::editing::clear_all(state);
}

/// Verwirft den aktiven Punkt des Marker-Tools.
pub fn cancel_active_point(state: &mut AppState) {
    use_cases::editing::cancel_active_point(state);
}

/// Verwirft die laufende Winkel-Konstruktion.
pub fn cancel_angle_construction(state: &mut AppState) {
    use_cases::editing::cancel_angle_construction(state);
}
