//! Handler für Selektions-Commands.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert den nächsten Punkt zur Canvas-Position.
pub fn select_nearest_point(
    state: &mut AppState,
    position: DVec2,
    max_distance: f64,
    additive: bool,
) {
    use_cases::selection::select_nearest_point(state, position, max_distance, additive);
}

/// Selektiert einen Punkt.
pub fn select_point(state: &mut AppState, point_id: Option<u64>, additive: bool) {
    use_cases::selection::select_point(state, point_id, additive);
}

/// Selektiert eine Linie.
pub fn select_line(state: &mut AppState, line_id: Option<u64>, additive: bool) {
    use_cases::selection::select_line(state, line_id, additive);
}

/// Selektiert einen Winkel.
pub fn select_angle(state: &mut AppState, angle_id: Option<u64>, additive: bool) {
    use_cases::selection::select_angle(state, angle_id, additive);
}

/// Selektiert den Referenzkreis.
pub fn select_circle(state: &mut AppState, additive: bool) {
    use_cases::selection::select_circle(state, additive);
}

/// Hebt die gesamte Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Selektiert alle Punkte.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all_points(state);
}
