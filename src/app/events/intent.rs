use glam::DVec2;

use crate::app::state::EditorTool;
use crate::core::ResizeHandle;
use crate::shared::EditorOptions;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Die Input-Surface übersetzt Pointer-/Tastatur-Ereignisse in Intents;
/// das Intent-Mapping entscheidet zustandsabhängig über die Commands.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Klick auf die Canvas (Dispatch je nach aktivem Werkzeug)
    CanvasClicked { position: DVec2, additive: bool },
    /// Winkel-Tool: Linie angeklickt (ID von der Input-Surface aufgelöst)
    AngleToolLineClicked { line_id: u64 },
    /// Freien Punkt an Position hinzufügen
    AddPointRequested { position: DVec2 },

    /// Drag-Lifecycle Start: Punkt wird gezogen
    PointDragStarted { point_id: u64 },
    /// Drag-Lifecycle Update: neue Vorschau-Position
    PointDragUpdated { position: DVec2 },
    /// Drag-Lifecycle Ende: Position committen
    PointDragEnded,
    /// Punktposition direkt setzen (ohne Drag-Vorschau)
    MovePointRequested { point_id: u64, position: DVec2 },
    /// Alle selektierten Punkte um ein Delta verschieben
    MoveSelectedRequested { delta: DVec2 },

    /// Referenzkreis um ein Zeiger-Delta verschieben
    CircleMoveRequested { delta: DVec2 },
    /// Referenzkreis über ein Handle skalieren
    CircleResizeRequested {
        handle: ResizeHandle,
        pointer: DVec2,
    },

    /// Punkt selektieren (None = Kanal leeren im Replace-Modus)
    SelectPointRequested {
        point_id: Option<u64>,
        additive: bool,
    },
    /// Linie selektieren
    SelectLineRequested {
        line_id: Option<u64>,
        additive: bool,
    },
    /// Winkel selektieren
    SelectAngleRequested {
        angle_id: Option<u64>,
        additive: bool,
    },
    /// Referenzkreis selektieren
    SelectCircleRequested { additive: bool },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Alle Punkte selektieren
    SelectAllRequested,

    /// Einzelnen Punkt löschen
    DeletePointRequested { point_id: u64 },
    /// Einzelne Linie löschen
    DeleteLineRequested { line_id: u64 },
    /// Einzelnen Winkel löschen
    DeleteAngleRequested { angle_id: u64 },
    /// Referenzkreis löschen
    DeleteCircleRequested,
    /// Alle selektierten Entitäten löschen
    DeleteSelectedRequested,
    /// Gesamten Sketch und alle Zwischenzustände zurücksetzen
    ClearAllRequested,

    /// Abbrechen (Escape): laufende Interaktion verwerfen
    CancelRequested,

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
