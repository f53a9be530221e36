use crate::core::RemovalSummary;
use crate::shared::PointDragPreview;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Entitäten selektieren und verschieben
    #[default]
    Cursor,
    /// Punkte setzen und zu Linien verbinden
    Marker,
    /// Winkel zwischen zwei Linien konstruieren
    Angle,
    /// Referenzkreis platzieren
    Circle,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Offenes Ende der gerade gezeichneten Linie (Marker-Tool)
    pub active_point_id: Option<u64>,
    /// Erste Linie einer laufenden Winkel-Konstruktion (Winkel-Tool)
    pub first_angle_line_id: Option<u64>,
    /// Laufendes Punkt-Drag-Overlay; Commit erst am Drag-Ende
    pub drag_preview: Option<PointDragPreview>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Cursor-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft Referenzen auf gelöschte Entitäten.
    pub fn prune_removed(&mut self, summary: &RemovalSummary) {
        if let Some(active_id) = self.active_point_id {
            if summary.points.contains(&active_id) {
                self.active_point_id = None;
            }
        }
        if let Some(first_id) = self.first_angle_line_id {
            if summary.lines.contains(&first_id) {
                self.first_angle_line_id = None;
            }
        }
        if let Some(preview) = self.drag_preview {
            if summary.points.contains(&preview.point_id) {
                self.drag_preview = None;
            }
        }
    }
}
