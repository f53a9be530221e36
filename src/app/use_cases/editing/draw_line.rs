//! Use-Case: Linien zeichnen mit dem Marker-Tool.

use glam::DVec2;

use crate::app::AppState;

/// Marker-Tool: Klick auf die Canvas.
///
/// Trifft der Klick einen existierenden Punkt innerhalb des Hit-Radius, wird
/// dieser verwendet, sonst entsteht ein neuer Punkt an der Klickposition.
/// Ohne aktiven Punkt wird das Ziel zum aktiven Punkt (Zeichnen beginnt).
/// Mit aktivem Punkt wird eine Linie geschlossen — außer das Ziel ist der
/// aktive Punkt selbst (Self-Loop → Abbruch). Das Ziel wird danach zum neuen
/// aktiven Punkt, so dass Poly-Linien in einem Klick-Strom entstehen.
pub fn marker_tool_click(state: &mut AppState, position: DVec2) {
    let target_id = resolve_click_target(state, position);

    let Some(active_id) = state.editor.active_point_id else {
        state.editor.active_point_id = Some(target_id);
        log::debug!("Marker-Tool: aktiver Punkt {}", target_id);
        return;
    };

    if target_id == active_id {
        // Self-Loop → Zeichnen abbrechen
        state.editor.active_point_id = None;
        log::debug!("Marker-Tool: Self-Loop auf Punkt {}, Abbruch", active_id);
        return;
    }

    match state.sketch_mut().add_line(active_id, target_id) {
        Some(line_id) => log::info!("Linie {} ({}–{}) erstellt", line_id, active_id, target_id),
        None => log::debug!("Linie {}–{} existiert bereits", active_id, target_id),
    }

    state.editor.active_point_id = Some(target_id);
}

/// Löst einen Klick auf einen existierenden Punkt (Hit-Radius) oder einen
/// neuen Punkt an der Klickposition auf.
fn resolve_click_target(state: &mut AppState, position: DVec2) -> u64 {
    let hit_radius = state.options.point_hit_radius;
    let hit = state
        .sketch
        .nearest_point(position)
        .filter(|hit| hit.distance <= hit_radius)
        .map(|hit| hit.point_id);

    match hit {
        Some(point_id) => point_id,
        None => state.sketch_mut().add_point(position),
    }
}

/// Escape: bricht das Linienzeichnen ohne Seiteneffekte ab.
pub fn cancel_active_point(state: &mut AppState) {
    if state.editor.active_point_id.take().is_some() {
        log::debug!("Marker-Tool: Zeichnen abgebrochen");
    }
}
