//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der (externe) Renderer sie
//! konsumiert.

use std::sync::Arc;

use glam::DVec2;
use indexmap::IndexSet;

use super::options::EditorOptions;
use crate::core::Sketch;

/// Vorschau-Position eines Punkts während eines laufenden Drags.
///
/// Wird erst beim Drag-Ende in den Sketch übernommen; bis dahin konsultieren
/// Render-Reads dieses Overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDragPreview {
    /// ID des gezogenen Punkts
    pub point_id: u64,
    /// Aktuelle (noch nicht committete) Position
    pub position: DVec2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Der aktuelle Sketch (Arc für O(1)-Clone pro Frame)
    pub sketch: Arc<Sketch>,
    /// IDs der selektierten Punkte
    pub selected_point_ids: IndexSet<u64>,
    /// IDs der selektierten Linien
    pub selected_line_ids: IndexSet<u64>,
    /// IDs der selektierten Winkel
    pub selected_angle_ids: IndexSet<u64>,
    /// Ob der Referenzkreis selektiert ist
    pub circle_selected: bool,
    /// Aktiver (pending) Punkt des Marker-Tools
    pub active_point_id: Option<u64>,
    /// Erste Linie einer laufenden Winkel-Konstruktion
    pub first_angle_line_id: Option<u64>,
    /// Drag-Overlay (noch nicht committete Punktposition)
    pub drag_preview: Option<PointDragPreview>,
    /// Laufzeit-Optionen für Farben, Größen, Radien
    pub options: EditorOptions,
    /// Revisionszähler des zugrunde liegenden AppState
    pub revision: u64,
}

impl RenderScene {
    /// Gibt zurück, ob Annotationen zum Zeichnen vorhanden sind.
    pub fn has_data(&self) -> bool {
        self.sketch.has_data()
    }

    /// Gibt zurück, ob irgendeine Selektion aktiv ist.
    pub fn has_selection(&self) -> bool {
        !self.selected_point_ids.is_empty()
            || !self.selected_line_ids.is_empty()
            || !self.selected_angle_ids.is_empty()
            || self.circle_selected
    }

    /// Effektive Position eines Punkts unter Berücksichtigung des Drag-Overlays.
    pub fn effective_point_position(&self, point_id: u64) -> Option<DVec2> {
        if let Some(preview) = self.drag_preview {
            if preview.point_id == point_id {
                return Some(preview.position);
            }
        }
        self.sketch.point(point_id).map(|p| p.position)
    }
}
