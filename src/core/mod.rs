//! Core-Domänentypen: Punkte, Linien, Winkel, Referenzkreis, Sketch, Spatial-Index.

pub mod angle;
pub mod circle;
pub mod geometry;
pub mod label;
pub mod line;
pub mod point;
/// Core-Datenmodelle für Bild-Annotationen
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Sketch: Container für alle Punkte, Linien, Winkel und den Kreis
/// - SketchPoint: Einzelner Messpunkt mit Position
/// - MeasureLine / MeasureAngle: abgeleitete Annotationen
pub mod sketch;
pub mod spatial;

pub use angle::{ArcParameters, MeasureAngle, ARC_RADIUS_MAX, ARC_RADIUS_MIN, ARC_RADIUS_RATIO};
pub use circle::{
    CircleUpdate, ReferenceCircle, ResizeHandle, CIRCLE_DEFAULT_RADIUS, CIRCLE_MIN_RADIUS_CORNER,
    CIRCLE_MIN_RADIUS_EDGE,
};
pub use line::MeasureLine;
pub use point::SketchPoint;
pub use sketch::{RemovalSummary, Sketch};
pub use spatial::{SpatialIndex, SpatialMatch};
