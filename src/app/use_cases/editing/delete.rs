//! Use-Case: Entitäten löschen (einzeln, selektiert, alles).

use crate::app::AppState;
use crate::core::RemovalSummary;

/// Löscht einen Punkt inklusive Kaskade und Orphan-Sweep.
pub fn delete_point(state: &mut AppState, point_id: u64) {
    let summary = state.sketch_mut().delete_point(point_id);
    finish_removal(state, summary);
}

/// Löscht eine Linie inklusive referenzierender Winkel und Orphan-Sweep.
pub fn delete_line(state: &mut AppState, line_id: u64) {
    let summary = state.sketch_mut().delete_line(line_id);
    finish_removal(state, summary);
}

/// Löscht genau einen Winkel.
pub fn delete_angle(state: &mut AppState, angle_id: u64) {
    let summary = state.sketch_mut().delete_angle(angle_id);
    finish_removal(state, summary);
}

/// Entfernt den Referenzkreis samt Selektions-Flag.
pub fn delete_circle(state: &mut AppState) {
    if state.sketch_mut().delete_circle() {
        state.selection.circle_selected = false;
        log::info!("Referenzkreis gelöscht");
    }
}

/// Löst die aktuelle Mehrklassen-Selektion in eine kombinierte Löschung auf.
///
/// Der Sketch berechnet die vollständige Löschmenge (Linien = selektierte ∪
/// inzidente der selektierten Punkte, Winkel entsprechend) in einem Batch,
/// danach werden Selektion und Tool-Zustand bereinigt.
pub fn delete_selected(state: &mut AppState) {
    if !state.selection.has_selection() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let point_ids: Vec<u64> = state.selection.selected_point_ids.iter().copied().collect();
    let line_ids: Vec<u64> = state.selection.selected_line_ids.iter().copied().collect();
    let angle_ids: Vec<u64> = state.selection.selected_angle_ids.iter().copied().collect();
    let remove_circle = state.selection.circle_selected;

    let summary = state
        .sketch_mut()
        .delete_batch(&point_ids, &line_ids, &angle_ids, remove_circle);

    log::info!(
        "Selektion gelöscht: {} Punkt(e), {} Linie(n), {} Winkel",
        summary.points.len(),
        summary.lines.len(),
        summary.angles.len()
    );
    finish_removal(state, summary);
}

/// Setzt den gesamten Sketch und alle Zwischenzustände zurück.
pub fn clear_all(state: &mut AppState) {
    state.sketch_mut().clear();
    state.selection.clear();
    state.editor.active_point_id = None;
    state.editor.first_angle_line_id = None;
    state.editor.drag_preview = None;
    log::info!("Sketch vollständig zurückgesetzt");
}

/// Bereinigt Selektion und Tool-Zustand nach einer Löschung.
fn finish_removal(state: &mut AppState, summary: RemovalSummary) {
    if summary.is_empty() {
        return;
    }
    state.prune_removed(&summary);
}
