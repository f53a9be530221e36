//! Use-Case: Winkel konstruieren mit dem Winkel-Tool.

use crate::app::AppState;

/// Winkel-Tool: Klick auf eine Linie.
///
/// Der erste Klick merkt sich die Linie; ein erneuter Klick auf dieselbe
/// Linie bricht ab. Der Klick auf eine zweite Linie versucht die
/// Konstruktion (stillschweigend verworfen ohne gemeinsamen Endpunkt oder
/// bei bereits vermessenem Paar) und kehrt in jedem Fall zum Ausgangszustand
/// zurück.
pub fn angle_tool_line_click(state: &mut AppState, line_id: u64) {
    if state.sketch.line(line_id).is_none() {
        log::debug!("Winkel-Tool: Linie {} existiert nicht", line_id);
        return;
    }

    let Some(first_id) = state.editor.first_angle_line_id.take() else {
        state.editor.first_angle_line_id = Some(line_id);
        log::debug!("Winkel-Tool: erste Linie {}", line_id);
        return;
    };

    if first_id == line_id {
        log::debug!("Winkel-Tool: Konstruktion abgebrochen");
        return;
    }

    match state.sketch_mut().add_angle(first_id, line_id) {
        Some(angle_id) => log::info!(
            "Winkel {} zwischen Linien {} und {} erstellt",
            angle_id,
            first_id,
            line_id
        ),
        None => log::debug!(
            "Winkel {}–{} verworfen (kein gemeinsamer Endpunkt oder Duplikat)",
            first_id,
            line_id
        ),
    }
}

/// Escape: verwirft die laufende Winkel-Konstruktion.
pub fn cancel_angle_construction(state: &mut AppState) {
    if state.editor.first_angle_line_id.take().is_some() {
        log::debug!("Winkel-Tool: Konstruktion abgebrochen");
    }
}
