use std::sync::Arc;

use crate::app::CommandLog;
use crate::core::{RemovalSummary, Sketch};
use crate::shared::EditorOptions;

use super::{EditorToolState, SelectionState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der Annotations-Sketch (Arc für O(1)-Clone in RenderScene)
    pub sketch: Arc<Sketch>,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Farben, Stärken)
    pub options: EditorOptions,
    /// Monoton wachsender Änderungszähler; wird nach jedem Command erhöht
    pub revision: u64,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            sketch: Arc::new(Sketch::new()),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            revision: 0,
        }
    }

    /// Gibt eine mutable Referenz auf den Sketch zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen des Sketch gehen über diese Methode, damit der
    /// Arc-Klon in `render_scene::build()` O(1) bleibt.
    #[inline]
    pub fn sketch_mut(&mut self) -> &mut Sketch {
        Arc::make_mut(&mut self.sketch)
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.sketch.point_count()
    }

    /// Gibt die Anzahl der Linien zurück (für UI-Anzeige)
    pub fn line_count(&self) -> usize {
        self.sketch.line_count()
    }

    /// Gibt die Anzahl der Winkel zurück (für UI-Anzeige)
    pub fn angle_count(&self) -> usize {
        self.sketch.angle_count()
    }

    /// Prüft ob irgendeine Selektion aktiv ist
    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    /// Entfernt Referenzen auf gelöschte Entitäten aus Selektion und Tool-Zustand.
    pub fn prune_removed(&mut self, summary: &RemovalSummary) {
        self.selection.prune_removed(summary);
        self.editor.prune_removed(summary);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
