//! Repräsentiert eine Messlinie zwischen zwei Punkten.

/// Eine ungerichtete Linie zwischen zwei Punkten
#[derive(Debug, Clone)]
pub struct MeasureLine {
    /// Eindeutige ID
    pub id: u64,
    /// Anzeige-Label aus dem Buchstaben-Pool (A–Z, danach L27, L28, …)
    pub label: String,
    /// Erster Endpunkt
    pub start_id: u64,
    /// Zweiter Endpunkt
    pub end_id: u64,
}

impl MeasureLine {
    /// Erstellt eine neue Linie
    pub fn new(id: u64, label: String, start_id: u64, end_id: u64) -> Self {
        Self {
            id,
            label,
            start_id,
            end_id,
        }
    }

    /// Prüft ob der Punkt ein Endpunkt dieser Linie ist
    pub fn is_incident_to(&self, point_id: u64) -> bool {
        self.start_id == point_id || self.end_id == point_id
    }

    /// Gibt den jeweils anderen Endpunkt zurück
    pub fn other_endpoint(&self, point_id: u64) -> Option<u64> {
        if self.start_id == point_id {
            Some(self.end_id)
        } else if self.end_id == point_id {
            Some(self.start_id)
        } else {
            None
        }
    }

    /// Prüft ob die Linie dasselbe ungeordnete Endpunktpaar verbindet
    pub fn connects_pair(&self, a: u64, b: u64) -> bool {
        (self.start_id == a && self.end_id == b) || (self.start_id == b && self.end_id == a)
    }

    /// Findet den gemeinsamen Endpunkt mit einer anderen Linie.
    ///
    /// Zwei verschiedene Linien teilen wegen des Duplikat-Verbots höchstens
    /// einen Endpunkt.
    pub fn shared_endpoint_with(&self, other: &MeasureLine) -> Option<u64> {
        if other.is_incident_to(self.start_id) {
            Some(self.start_id)
        } else if other.is_incident_to(self.end_id) {
            Some(self.end_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_pair_ignores_endpoint_order() {
        let line = MeasureLine::new(10, "A".to_string(), 1, 2);
        assert!(line.connects_pair(1, 2));
        assert!(line.connects_pair(2, 1));
        assert!(!line.connects_pair(1, 3));
    }

    #[test]
    fn other_endpoint_returns_opposite_point() {
        let line = MeasureLine::new(10, "A".to_string(), 1, 2);
        assert_eq!(line.other_endpoint(1), Some(2));
        assert_eq!(line.other_endpoint(2), Some(1));
        assert_eq!(line.other_endpoint(3), None);
    }

    #[test]
    fn shared_endpoint_with_finds_common_point() {
        let a = MeasureLine::new(10, "A".to_string(), 1, 2);
        let b = MeasureLine::new(11, "B".to_string(), 2, 3);
        let c = MeasureLine::new(12, "C".to_string(), 4, 5);

        assert_eq!(a.shared_endpoint_with(&b), Some(2));
        assert_eq!(b.shared_endpoint_with(&a), Some(2));
        assert_eq!(a.shared_endpoint_with(&c), None);
    }
}
