//! Use-Case: Freien Punkt an einer Canvas-Position hinzufügen.

use crate::app::AppState;

/// Fügt einen neuen Punkt an der gegebenen Position hinzu.
pub fn add_point_at_position(state: &mut AppState, position: glam::DVec2) -> u64 {
    let id = state.sketch_mut().add_point(position);
    log::info!(
        "Punkt {} an Position ({:.1}, {:.1}) hinzugefügt",
        id,
        position.x,
        position.y
    );
    id
}
