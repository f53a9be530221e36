//! Repräsentiert einen gesetzten Annotationspunkt auf der Bildfläche.

use glam::DVec2;

/// Ein einzelner Messpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchPoint {
    /// Eindeutige ID (wird innerhalb des Prozesses nie wiederverwendet)
    pub id: u64,
    /// Position in Canvas-Pixel-Einheiten
    pub position: DVec2,
}

impl SketchPoint {
    /// Erstellt einen neuen Punkt
    pub fn new(id: u64, position: DVec2) -> Self {
        Self { id, position }
    }
}
