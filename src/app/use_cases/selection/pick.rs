//! Use-Case: Selektion über die vier wechselseitig bewussten Kanäle.
//!
//! Replace-Modus: Die Auswahl einer Entität ersetzt die Selektion ihrer
//! Klasse und leert die drei anderen Kanäle; ein Leerziel leert nur den
//! eigenen Kanal. Toggle-Modus: kippt ausschließlich die Mitgliedschaft im
//! eigenen Kanal.

use glam::DVec2;

use crate::app::AppState;

/// Selektiert den nächsten Punkt zur gegebenen Canvas-Position.
///
/// Falls kein Punkt innerhalb von `max_distance` liegt, wird im
/// Replace-Modus die Selektion gelöscht.
pub fn select_nearest_point(
    state: &mut AppState,
    position: DVec2,
    max_distance: f64,
    additive: bool,
) {
    if max_distance < 0.0 {
        state.selection.clear();
        return;
    }

    let hit = state
        .sketch
        .nearest_point(position)
        .filter(|hit| hit.distance <= max_distance)
        .map(|hit| hit.point_id);

    select_point(state, hit, additive);
}

/// Selektiert einen Punkt (Replace oder Toggle).
pub fn select_point(state: &mut AppState, point_id: Option<u64>, additive: bool) {
    let target = point_id.filter(|id| state.sketch.point(*id).is_some());

    if additive {
        if let Some(id) = target {
            if !state.selection.selected_point_ids.shift_remove(&id) {
                state.selection.selected_point_ids.insert(id);
            }
        }
        return;
    }

    match target {
        Some(id) => {
            state.selection.clear();
            state.selection.selected_point_ids.insert(id);
        }
        None => {
            state.selection.selected_point_ids.clear();
        }
    }
}

/// Selektiert eine Linie (Replace oder Toggle).
pub fn select_line(state: &mut AppState, line_id: Option<u64>, additive: bool) {
    let target = line_id.filter(|id| state.sketch.line(*id).is_some());

    if additive {
        if let Some(id) = target {
            if !state.selection.selected_line_ids.shift_remove(&id) {
                state.selection.selected_line_ids.insert(id);
            }
        }
        return;
    }

    match target {
        Some(id) => {
            state.selection.clear();
            state.selection.selected_line_ids.insert(id);
        }
        None => {
            state.selection.selected_line_ids.clear();
        }
    }
}

/// Selektiert einen Winkel (Replace oder Toggle).
pub fn select_angle(state: &mut AppState, angle_id: Option<u64>, additive: bool) {
    let target = angle_id.filter(|id| state.sketch.angle(*id).is_some());

    if additive {
        if let Some(id) = target {
            if !state.selection.selected_angle_ids.shift_remove(&id) {
                state.selection.selected_angle_ids.insert(id);
            }
        }
        return;
    }

    match target {
        Some(id) => {
            state.selection.clear();
            state.selection.selected_angle_ids.insert(id);
        }
        None => {
            state.selection.selected_angle_ids.clear();
        }
    }
}

/// Selektiert den Referenzkreis (Replace oder Toggle).
pub fn select_circle(state: &mut AppState, additive: bool) {
    if state.sketch.circle().is_none() {
        if !additive {
            state.selection.circle_selected = false;
        }
        return;
    }

    if additive {
        state.selection.circle_selected = !state.selection.circle_selected;
    } else {
        state.selection.clear();
        state.selection.circle_selected = true;
    }
}

/// Hebt die gesamte Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Selektiert alle Punkte (Replace-Semantik).
pub fn select_all_points(state: &mut AppState) {
    state.selection.clear();
    state
        .selection
        .selected_point_ids
        .extend(state.sketch.point_ids());
}
