use glam::DVec2;

use crate::app::state::EditorTool;
use crate::core::ResizeHandle;
use crate::shared::EditorOptions;

/// Mutierende App-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug aktivieren (inkl. Aufräumen des Vorgänger-Werkzeugs)
    SetEditorTool { tool: EditorTool },

    /// Marker-Tool: Klick verarbeiten (Punkt treffen/erstellen, Linie schließen)
    MarkerToolClick { position: DVec2 },
    /// Kreis-Tool: Klick verarbeiten (Kreis erstellen, falls keiner existiert)
    CircleToolClick { position: DVec2 },
    /// Winkel-Tool: Linienklick verarbeiten
    AngleToolLineClick { line_id: u64 },
    /// Freien Punkt an Position erstellen
    AddPointAtPosition { position: DVec2 },

    /// Punktposition direkt setzen
    UpdatePointPosition { point_id: u64, position: DVec2 },
    /// Drag-Vorschau für einen Punkt beginnen
    BeginPointDrag { point_id: u64 },
    /// Drag-Vorschau aktualisieren
    UpdatePointDrag { position: DVec2 },
    /// Drag committen (Position in den Sketch übernehmen)
    EndPointDrag,
    /// Drag verwerfen (Escape während des Ziehens)
    CancelPointDrag,
    /// Selektierte Punkte um Delta verschieben
    MoveSelectedPoints { delta: DVec2 },

    /// Referenzkreis verschieben
    MoveCircle { delta: DVec2 },
    /// Referenzkreis über ein Handle skalieren
    ResizeCircle {
        handle: ResizeHandle,
        pointer: DVec2,
    },

    /// Nächstgelegenen Punkt selektieren (Cursor-Tool-Klick)
    SelectNearestPoint {
        position: DVec2,
        max_distance: f64,
        additive: bool,
    },
    /// Punkt selektieren (Replace oder Toggle)
    SelectPoint {
        point_id: Option<u64>,
        additive: bool,
    },
    /// Linie selektieren
    SelectLine {
        line_id: Option<u64>,
        additive: bool,
    },
    /// Winkel selektieren
    SelectAngle {
        angle_id: Option<u64>,
        additive: bool,
    },
    /// Referenzkreis selektieren
    SelectCircle { additive: bool },
    /// Selektion aufheben
    ClearSelection,
    /// Alle Punkte selektieren
    SelectAllPoints,

    /// Punkt löschen (Kaskade + Orphan-Sweep)
    DeletePoint { point_id: u64 },
    /// Linie löschen (Kaskade + Orphan-Sweep)
    DeleteLine { line_id: u64 },
    /// Winkel löschen
    DeleteAngle { angle_id: u64 },
    /// Referenzkreis löschen
    DeleteCircle,
    /// Kombinierte Löschung der aktuellen Selektion
    DeleteSelected,
    /// Alles zurücksetzen
    ClearAll,

    /// Aktiven Punkt des Marker-Tools verwerfen
    CancelActivePoint,
    /// Laufende Winkel-Konstruktion verwerfen
    CancelAngleConstruction,

    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
