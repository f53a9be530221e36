//! Use-Case: Referenzkreis erstellen, verschieben und skalieren.

use glam::DVec2;

use crate::app::AppState;
use crate::core::ResizeHandle;

/// Kreis-Tool: Klick auf die Canvas.
///
/// Erstellt den Referenzkreis mit Standardradius; weitere Klicks sind
/// No-ops solange einer existiert.
pub fn circle_tool_click(state: &mut AppState, position: DVec2) {
    if state.sketch_mut().create_circle(position) {
        log::info!(
            "Referenzkreis bei ({:.1}, {:.1}) erstellt",
            position.x,
            position.y
        );
    } else {
        log::debug!("Referenzkreis existiert bereits");
    }
}

/// Verschiebt den Kreis um das Zeiger-Delta (Radius unverändert).
pub fn move_circle(state: &mut AppState, delta: DVec2) {
    let Some(circle) = state.sketch.circle().copied() else {
        return;
    };
    state.sketch_mut().update_circle(circle.translated_by(delta));
}

/// Skaliert den Kreis über eines der acht Handles.
pub fn resize_circle(state: &mut AppState, handle: ResizeHandle, pointer: DVec2) {
    let Some(circle) = state.sketch.circle().copied() else {
        return;
    };
    let update = circle.resize_from_handle(handle, pointer);
    state.sketch_mut().update_circle(update);
}
