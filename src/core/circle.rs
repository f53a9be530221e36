//! Der singuläre Referenzkreis mit Resize-Handle-Geometrie.

use glam::DVec2;

/// Standardradius bei Kreis-Erstellung.
pub const CIRCLE_DEFAULT_RADIUS: f64 = 50.0;
/// Minimalradius bei Kanten-Handles, zugleich globale Untergrenze.
pub const CIRCLE_MIN_RADIUS_EDGE: f64 = 5.0;
/// Minimalradius bei Eck-Handles.
pub const CIRCLE_MIN_RADIUS_CORNER: f64 = 10.0;

/// Der Referenzkreis (höchstens einer pro Sketch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCircle {
    /// Eindeutige ID
    pub id: u64,
    /// Mittelpunkt in Canvas-Einheiten
    pub center: DVec2,
    /// Radius in Canvas-Einheiten
    pub radius: f64,
}

/// Partielles Update für Move/Resize-Interaktionen
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CircleUpdate {
    /// Neuer Mittelpunkt X (falls gesetzt)
    pub center_x: Option<f64>,
    /// Neuer Mittelpunkt Y (falls gesetzt)
    pub center_y: Option<f64>,
    /// Neuer Radius (falls gesetzt)
    pub radius: Option<f64>,
}

/// Die acht Resize-Handles des Kreis-Begrenzungsrahmens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Ecke oben links
    TopLeft,
    /// Kantenmitte oben
    Top,
    /// Ecke oben rechts
    TopRight,
    /// Kantenmitte rechts
    Right,
    /// Ecke unten rechts
    BottomRight,
    /// Kantenmitte unten
    Bottom,
    /// Ecke unten links
    BottomLeft,
    /// Kantenmitte links
    Left,
}

impl ResizeHandle {
    /// Prüft ob das Handle eine Ecke des Begrenzungsrahmens ist
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }

    /// Minimalradius für dieses Handle
    pub fn min_radius(&self) -> f64 {
        if self.is_corner() {
            CIRCLE_MIN_RADIUS_CORNER
        } else {
            CIRCLE_MIN_RADIUS_EDGE
        }
    }
}

impl ReferenceCircle {
    /// Erstellt einen neuen Kreis mit Standardradius
    pub fn new(id: u64, center: DVec2) -> Self {
        Self {
            id,
            center,
            radius: CIRCLE_DEFAULT_RADIUS,
        }
    }

    /// Wendet ein partielles Update an; der Radius wird nach unten geklemmt.
    pub fn apply_update(&mut self, update: CircleUpdate) {
        if let Some(x) = update.center_x {
            self.center.x = x;
        }
        if let Some(y) = update.center_y {
            self.center.y = y;
        }
        if let Some(r) = update.radius {
            self.radius = r.max(CIRCLE_MIN_RADIUS_EDGE);
        }
    }

    /// Berechnet das Resize-Update für ein Handle und die Zeigerposition.
    ///
    /// Jedes Handle skaliert um den gegenüberliegenden Rahmenpunkt (Anker),
    /// der dabei exakt liegen bleibt: der neue Mittelpunkt wird aus Anker und
    /// neuem Radius rekonstruiert. Kanten-Handles messen die halbe
    /// Zeigerdistanz zur aktuellen Mittelpunktachse und lassen die
    /// orthogonale Achse unverändert; Eck-Handles nehmen das Minimum der
    /// beiden Achsabstände zum Anker, damit der Kreis rund bleibt.
    pub fn resize_from_handle(&self, handle: ResizeHandle, pointer: DVec2) -> CircleUpdate {
        let min_radius = handle.min_radius();

        match handle {
            ResizeHandle::Right => {
                let anchor_x = self.center.x - self.radius;
                let radius = ((pointer.x - self.center.x).abs() / 2.0).max(min_radius);
                CircleUpdate {
                    center_x: Some(anchor_x + radius),
                    center_y: None,
                    radius: Some(radius),
                }
            }
            ResizeHandle::Left => {
                let anchor_x = self.center.x + self.radius;
                let radius = ((pointer.x - self.center.x).abs() / 2.0).max(min_radius);
                CircleUpdate {
                    center_x: Some(anchor_x - radius),
                    center_y: None,
                    radius: Some(radius),
                }
            }
            ResizeHandle::Bottom => {
                let anchor_y = self.center.y - self.radius;
                let radius = ((pointer.y - self.center.y).abs() / 2.0).max(min_radius);
                CircleUpdate {
                    center_x: None,
                    center_y: Some(anchor_y + radius),
                    radius: Some(radius),
                }
            }
            ResizeHandle::Top => {
                let anchor_y = self.center.y + self.radius;
                let radius = ((pointer.y - self.center.y).abs() / 2.0).max(min_radius);
                CircleUpdate {
                    center_x: None,
                    center_y: Some(anchor_y - radius),
                    radius: Some(radius),
                }
            }
            ResizeHandle::BottomRight => {
                let anchor = self.center - DVec2::splat(self.radius);
                let radius = self.corner_radius(anchor, pointer, min_radius);
                CircleUpdate {
                    center_x: Some(anchor.x + radius),
                    center_y: Some(anchor.y + radius),
                    radius: Some(radius),
                }
            }
            ResizeHandle::TopLeft => {
                let anchor = self.center + DVec2::splat(self.radius);
                let radius = self.corner_radius(anchor, pointer, min_radius);
                CircleUpdate {
                    center_x: Some(anchor.x - radius),
                    center_y: Some(anchor.y - radius),
                    radius: Some(radius),
                }
            }
            ResizeHandle::TopRight => {
                let anchor = DVec2::new(self.center.x - self.radius, self.center.y + self.radius);
                let radius = self.corner_radius(anchor, pointer, min_radius);
                CircleUpdate {
                    center_x: Some(anchor.x + radius),
                    center_y: Some(anchor.y - radius),
                    radius: Some(radius),
                }
            }
            ResizeHandle::BottomLeft => {
                let anchor = DVec2::new(self.center.x + self.radius, self.center.y - self.radius);
                let radius = self.corner_radius(anchor, pointer, min_radius);
                CircleUpdate {
                    center_x: Some(anchor.x - radius),
                    center_y: Some(anchor.y + radius),
                    radius: Some(radius),
                }
            }
        }
    }

    /// Verschiebt den Kreis um das Zeiger-Delta (Radius unverändert).
    pub fn translated_by(&self, delta: DVec2) -> CircleUpdate {
        CircleUpdate {
            center_x: Some(self.center.x + delta.x),
            center_y: Some(self.center.y + delta.y),
            radius: None,
        }
    }

    /// Radius eines Eck-Resizes: Minimum der halben Achsabstände zum Anker.
    fn corner_radius(&self, anchor: DVec2, pointer: DVec2, min_radius: f64) -> f64 {
        let dx = (pointer.x - anchor.x).abs();
        let dy = (pointer.y - anchor.y).abs();
        (dx.min(dy) / 2.0).max(min_radius)
    }
}
