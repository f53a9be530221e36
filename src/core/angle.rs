//! Repräsentiert einen Winkel zwischen zwei Linien mit gemeinsamem Scheitel.

use glam::DVec2;

use super::geometry;

/// Bogenradius als Anteil des kürzeren Schenkels.
pub const ARC_RADIUS_RATIO: f64 = 0.3;
/// Minimaler Bogenradius in Canvas-Einheiten.
pub const ARC_RADIUS_MIN: f64 = 20.0;
/// Maximaler Bogenradius in Canvas-Einheiten.
pub const ARC_RADIUS_MAX: f64 = 50.0;

/// Ein gemessener Winkel zwischen zwei Linien
#[derive(Debug, Clone)]
pub struct MeasureAngle {
    /// Eindeutige ID
    pub id: u64,
    /// Anzeige-Label aus dem Theta-Pool (θ1, θ2, …)
    pub label: String,
    /// Zuerst gewählte Linie
    pub line_a_id: u64,
    /// Danach gewählte Linie
    pub line_b_id: u64,
    /// Gemeinsamer Endpunkt beider Linien
    pub vertex_id: u64,
    /// Gecachter Gradwert; Quelle der Wahrheit sind die Punktpositionen
    pub degrees: f64,
}

impl MeasureAngle {
    /// Erstellt einen neuen Winkel
    pub fn new(
        id: u64,
        label: String,
        line_a_id: u64,
        line_b_id: u64,
        vertex_id: u64,
        degrees: f64,
    ) -> Self {
        Self {
            id,
            label,
            line_a_id,
            line_b_id,
            vertex_id,
            degrees,
        }
    }

    /// Prüft ob der Winkel die Linie referenziert
    pub fn references_line(&self, line_id: u64) -> bool {
        self.line_a_id == line_id || self.line_b_id == line_id
    }

    /// Prüft ob der Winkel dasselbe ungeordnete Linienpaar beschreibt
    pub fn covers_line_pair(&self, a: u64, b: u64) -> bool {
        (self.line_a_id == a && self.line_b_id == b)
            || (self.line_a_id == b && self.line_b_id == a)
    }
}

/// Bogenparameter für die Winkel-Darstellung durch den Renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParameters {
    /// Bogenradius in Canvas-Einheiten
    pub radius: f64,
    /// Strahlwinkel Scheitel→Fernpunkt der ersten Linie (Radiant)
    pub start_angle: f64,
    /// Strahlwinkel Scheitel→Fernpunkt der zweiten Linie (Radiant)
    pub end_angle: f64,
    /// Vorzeichenbehafteter Überstreichungswinkel in (-PI, PI] (Radiant)
    pub sweep: f64,
    /// Überstrichener Winkel in Grad (Anzeigewert)
    pub sweep_degrees: f64,
    /// Sweep-Flag für SVG-Pfade (true = positive Drehrichtung)
    pub sweep_flag: bool,
    /// Large-Arc-Flag; nach Normalisierung konstruktionsbedingt false
    pub large_arc: bool,
}

impl ArcParameters {
    /// Berechnet die Bogenparameter aus Scheitel und den beiden Fernpunkten.
    ///
    /// Der Radius ist 30% des kürzeren Schenkels, geklemmt auf [20, 50].
    /// Hat ein Schenkel Länge null, gilt wie bei der Skalarprodukt-Messung
    /// ein Überstreichungswinkel von 0.
    pub fn from_rays(vertex: DVec2, far_a: DVec2, far_b: DVec2) -> Self {
        let ray_a = far_a - vertex;
        let ray_b = far_b - vertex;
        let len_a = ray_a.length();
        let len_b = ray_b.length();

        if len_a == 0.0 || len_b == 0.0 {
            return Self {
                radius: ARC_RADIUS_MIN,
                start_angle: 0.0,
                end_angle: 0.0,
                sweep: 0.0,
                sweep_degrees: 0.0,
                sweep_flag: false,
                large_arc: false,
            };
        }

        let radius = (len_a.min(len_b) * ARC_RADIUS_RATIO).clamp(ARC_RADIUS_MIN, ARC_RADIUS_MAX);
        let start_angle = ray_a.y.atan2(ray_a.x);
        let end_angle = ray_b.y.atan2(ray_b.x);
        let sweep = geometry::normalize_signed_angle(end_angle - start_angle);

        Self {
            radius,
            start_angle,
            end_angle,
            sweep,
            sweep_degrees: sweep.abs().to_degrees(),
            sweep_flag: sweep > 0.0,
            large_arc: false,
        }
    }
}
