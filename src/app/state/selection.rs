use indexmap::IndexSet;

use crate::core::RemovalSummary;

/// Auswahlbezogener Anwendungszustand: vier wechselseitig bewusste Kanäle.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Selektierte Punkt-IDs (IndexSet für deterministische Reihenfolge)
    pub selected_point_ids: IndexSet<u64>,
    /// Selektierte Linien-IDs
    pub selected_line_ids: IndexSet<u64>,
    /// Selektierte Winkel-IDs
    pub selected_angle_ids: IndexSet<u64>,
    /// Ob der Referenzkreis selektiert ist
    pub circle_selected: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert alle vier Kanäle.
    pub fn clear(&mut self) {
        self.selected_point_ids.clear();
        self.selected_line_ids.clear();
        self.selected_angle_ids.clear();
        self.circle_selected = false;
    }

    /// Prüft ob irgendeine Selektion aktiv ist.
    pub fn has_selection(&self) -> bool {
        !self.selected_point_ids.is_empty()
            || !self.selected_line_ids.is_empty()
            || !self.selected_angle_ids.is_empty()
            || self.circle_selected
    }

    /// Entfernt gelöschte IDs aus allen Kanälen.
    pub fn prune_removed(&mut self, summary: &RemovalSummary) {
        for id in &summary.points {
            self.selected_point_ids.shift_remove(id);
        }
        for id in &summary.lines {
            self.selected_line_ids.shift_remove(id);
        }
        for id in &summary.angles {
            self.selected_angle_ids.shift_remove(id);
        }
        if summary.circle_removed {
            self.circle_selected = false;
        }
    }
}
