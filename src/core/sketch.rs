//! Die zentrale Sketch-Datenstruktur mit Punkten, Linien, Winkeln und Referenzkreis.

use std::collections::{HashMap, HashSet};

use glam::DVec2;

use super::{
    geometry, label, ArcParameters, CircleUpdate, MeasureAngle, MeasureLine, ReferenceCircle,
    SketchPoint,
};
use super::{SpatialIndex, SpatialMatch};

/// Container für alle Annotationen eines Bildes
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    /// Alle Punkte, indexiert nach ihrer ID
    points: HashMap<u64, SketchPoint>,
    /// Alle Linien, indexiert nach ihrer ID
    lines: HashMap<u64, MeasureLine>,
    /// Alle Winkel, indexiert nach ihrer ID
    angles: HashMap<u64, MeasureAngle>,
    /// Der Referenzkreis (höchstens einer)
    circle: Option<ReferenceCircle>,
    /// Monoton wachsender ID-Zähler; IDs werden nie wiederverwendet
    next_id: u64,
    /// Persistenter Spatial-Index für schnelle Punkt-Abfragen
    spatial_index: SpatialIndex,
}

impl Sketch {
    /// Erstellt einen neuen leeren Sketch
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt die nächste ID (ein Zähler für alle Entitätsarten)
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ── Punkte ──────────────────────────────────────────────────

    /// Fügt einen neuen Punkt hinzu und gibt seine ID zurück
    pub fn add_point(&mut self, position: DVec2) -> u64 {
        let id = self.allocate_id();
        self.points.insert(id, SketchPoint::new(id, position));
        self.rebuild_spatial_index();
        id
    }

    /// Gibt den Punkt mit der ID zurück
    pub fn point(&self, id: u64) -> Option<&SketchPoint> {
        self.points.get(&id)
    }

    /// Iterator über alle Punkte (read-only)
    pub fn points_iter(&self) -> impl Iterator<Item = &SketchPoint> {
        self.points.values()
    }

    /// IDs aller Punkte, aufsteigend sortiert
    pub fn point_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.points.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Gibt die Anzahl der Punkte zurück
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Aktualisiert die Position eines Punkts und rechnet abhängige Winkel neu.
    pub fn update_point_position(&mut self, id: u64, new_position: DVec2) -> bool {
        let Some(point) = self.points.get_mut(&id) else {
            return false;
        };

        if point.position == new_position {
            return true;
        }

        point.position = new_position;
        self.recompute_angles();
        self.rebuild_spatial_index();
        true
    }

    /// Verschiebt die angegebenen Punkte um ein gemeinsames Delta.
    ///
    /// Winkel und Spatial-Index werden einmal am Ende aktualisiert.
    pub fn translate_points(&mut self, ids: &[u64], delta: DVec2) -> bool {
        let mut moved_any = false;
        for id in ids {
            if let Some(point) = self.points.get_mut(id) {
                point.position += delta;
                moved_any = true;
            }
        }

        if moved_any {
            self.recompute_angles();
            self.rebuild_spatial_index();
        }
        moved_any
    }

    // ── Linien ──────────────────────────────────────────────────

    /// Erstellt eine Linie zwischen zwei Punkten.
    ///
    /// Self-Loops, unbekannte Endpunkte und Duplikate (gleiches ungeordnetes
    /// Paar) werden abgelehnt. Das Label ist das erste unbenutzte aus dem
    /// Buchstaben-Pool.
    pub fn add_line(&mut self, start_id: u64, end_id: u64) -> Option<u64> {
        if start_id == end_id {
            return None;
        }
        if !self.points.contains_key(&start_id) || !self.points.contains_key(&end_id) {
            return None;
        }
        if self.has_line_between(start_id, end_id) {
            return None;
        }

        let label = label::next_line_label(self.lines.values().map(|l| l.label.as_str()));
        let id = self.allocate_id();
        self.lines
            .insert(id, MeasureLine::new(id, label, start_id, end_id));
        Some(id)
    }

    /// Gibt die Linie mit der ID zurück
    pub fn line(&self, id: u64) -> Option<&MeasureLine> {
        self.lines.get(&id)
    }

    /// Iterator über alle Linien (read-only)
    pub fn lines_iter(&self) -> impl Iterator<Item = &MeasureLine> {
        self.lines.values()
    }

    /// Gibt die Anzahl der Linien zurück
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Prüft ob zwischen zwei Punkten eine Linie existiert (ungeordnet)
    pub fn has_line_between(&self, a: u64, b: u64) -> bool {
        self.lines.values().any(|line| line.connects_pair(a, b))
    }

    /// Findet die Linie zwischen zwei Punkten (ungeordnet)
    pub fn line_between(&self, a: u64, b: u64) -> Option<&MeasureLine> {
        self.lines.values().find(|line| line.connects_pair(a, b))
    }

    /// IDs aller Linien, die den Punkt als Endpunkt haben
    pub fn lines_incident_to(&self, point_id: u64) -> Vec<u64> {
        self.lines
            .values()
            .filter(|line| line.is_incident_to(point_id))
            .map(|line| line.id)
            .collect()
    }

    /// Aktuelle Länge einer Linie (live aus den Punktpositionen).
    pub fn line_length(&self, id: u64) -> Option<f64> {
        let line = self.lines.get(&id)?;
        let start = self.points.get(&line.start_id)?;
        let end = self.points.get(&line.end_id)?;
        Some(geometry::distance(start.position, end.position))
    }

    // ── Winkel ──────────────────────────────────────────────────

    /// Erstellt einen Winkel zwischen zwei Linien mit gemeinsamem Endpunkt.
    ///
    /// Die Linien werden in Klick-Reihenfolge gespeichert. Identische Linien,
    /// Paare ohne gemeinsamen Endpunkt und bereits vermessene Paare werden
    /// abgelehnt.
    pub fn add_angle(&mut self, line_a_id: u64, line_b_id: u64) -> Option<u64> {
        if line_a_id == line_b_id {
            return None;
        }
        if self.has_angle_for_pair(line_a_id, line_b_id) {
            return None;
        }

        let line_a = self.lines.get(&line_a_id)?;
        let line_b = self.lines.get(&line_b_id)?;
        let vertex_id = line_a.shared_endpoint_with(line_b)?;

        let degrees = self.measure_angle_degrees(line_a_id, line_b_id, vertex_id);
        let label = label::next_angle_label(self.angles.values().map(|a| a.label.as_str()));
        let id = self.allocate_id();
        self.angles.insert(
            id,
            MeasureAngle::new(id, label, line_a_id, line_b_id, vertex_id, degrees),
        );
        Some(id)
    }

    /// Gibt den Winkel mit der ID zurück
    pub fn angle(&self, id: u64) -> Option<&MeasureAngle> {
        self.angles.get(&id)
    }

    /// Iterator über alle Winkel (read-only)
    pub fn angles_iter(&self) -> impl Iterator<Item = &MeasureAngle> {
        self.angles.values()
    }

    /// Gibt die Anzahl der Winkel zurück
    pub fn angle_count(&self) -> usize {
        self.angles.len()
    }

    /// Prüft ob für das ungeordnete Linienpaar bereits ein Winkel existiert
    pub fn has_angle_for_pair(&self, a: u64, b: u64) -> bool {
        self.angles.values().any(|angle| angle.covers_line_pair(a, b))
    }

    /// Bogenparameter eines Winkels für die Renderer-Darstellung.
    pub fn arc_parameters(&self, angle_id: u64) -> Option<ArcParameters> {
        let angle = self.angles.get(&angle_id)?;
        let line_a = self.lines.get(&angle.line_a_id)?;
        let line_b = self.lines.get(&angle.line_b_id)?;

        let vertex = self.points.get(&angle.vertex_id)?.position;
        let far_a = self.points.get(&line_a.other_endpoint(angle.vertex_id)?)?;
        let far_b = self.points.get(&line_b.other_endpoint(angle.vertex_id)?)?;

        Some(ArcParameters::from_rays(vertex, far_a.position, far_b.position))
    }

    /// Misst den Winkel zwischen zwei Linien am Scheitel aus den aktuellen Positionen.
    fn measure_angle_degrees(&self, line_a_id: u64, line_b_id: u64, vertex_id: u64) -> f64 {
        let far_position = |line_id: u64| -> Option<DVec2> {
            let line = self.lines.get(&line_id)?;
            let far_id = line.other_endpoint(vertex_id)?;
            Some(self.points.get(&far_id)?.position)
        };

        let vertex = self.points.get(&vertex_id).map(|p| p.position);
        match (vertex, far_position(line_a_id), far_position(line_b_id)) {
            (Some(vertex), Some(far_a), Some(far_b)) => {
                geometry::angle_between_degrees(vertex, far_a, far_b)
            }
            _ => 0.0,
        }
    }

    /// Rechnet die Gradwerte aller Winkel aus den aktuellen Punktpositionen neu.
    ///
    /// Winkel, deren Linien nicht mehr beide existieren, bleiben unberührt —
    /// sie werden ausschließlich über die Lösch-Kaskade entfernt.
    fn recompute_angles(&mut self) {
        // Werte zuerst einsammeln, um Borrow-Konflikt zu vermeiden
        let updates: Vec<(u64, f64)> = self
            .angles
            .values()
            .filter(|angle| {
                self.lines.contains_key(&angle.line_a_id)
                    && self.lines.contains_key(&angle.line_b_id)
            })
            .map(|angle| {
                (
                    angle.id,
                    self.measure_angle_degrees(angle.line_a_id, angle.line_b_id, angle.vertex_id),
                )
            })
            .collect();

        for (id, degrees) in updates {
            if let Some(angle) = self.angles.get_mut(&id) {
                angle.degrees = degrees;
            }
        }
    }

    // ── Referenzkreis ───────────────────────────────────────────

    /// Erstellt den Referenzkreis mit Standardradius.
    ///
    /// No-op solange bereits ein Kreis existiert (gibt dann `false` zurück).
    pub fn create_circle(&mut self, center: DVec2) -> bool {
        if self.circle.is_some() {
            return false;
        }
        let id = self.allocate_id();
        self.circle = Some(ReferenceCircle::new(id, center));
        true
    }

    /// Gibt den Referenzkreis zurück
    pub fn circle(&self) -> Option<&ReferenceCircle> {
        self.circle.as_ref()
    }

    /// Wendet ein partielles Update auf den Kreis an
    pub fn update_circle(&mut self, update: CircleUpdate) -> bool {
        match self.circle.as_mut() {
            Some(circle) => {
                circle.apply_update(update);
                true
            }
            None => false,
        }
    }

    /// Entfernt den Referenzkreis
    pub fn delete_circle(&mut self) -> bool {
        self.circle.take().is_some()
    }

    // ── Löschen & Konsistenz ────────────────────────────────────

    /// Löscht einen Punkt inklusive aller inzidenten Linien und deren Winkel
    pub fn delete_point(&mut self, id: u64) -> RemovalSummary {
        self.delete_batch(&[id], &[], &[], false)
    }

    /// Löscht eine Linie inklusive aller referenzierenden Winkel
    pub fn delete_line(&mut self, id: u64) -> RemovalSummary {
        self.delete_batch(&[], &[id], &[], false)
    }

    /// Löscht genau einen Winkel (keine Kaskade, kein Orphan-Sweep)
    pub fn delete_angle(&mut self, id: u64) -> RemovalSummary {
        self.delete_batch(&[], &[], &[id], false)
    }

    /// Löst eine kombinierte Löschung über mehrere Entitätsklassen auf.
    ///
    /// Die vollständigen Mengen betroffener IDs werden VOR dem Entfernen
    /// berechnet (Linien = explizite ∪ inzidente der Punkte; Winkel =
    /// explizite ∪ Referenzen auf entfernte Linien), damit kein Winkel eine
    /// Linie überlebt, die im selben Batch fällt. Ändert sich der
    /// Liniengraph, läuft genau ein Orphan-Sweep über die verbliebenen
    /// Punkte.
    pub fn delete_batch(
        &mut self,
        point_ids: &[u64],
        line_ids: &[u64],
        angle_ids: &[u64],
        remove_circle: bool,
    ) -> RemovalSummary {
        let removed_points: HashSet<u64> = point_ids
            .iter()
            .copied()
            .filter(|id| self.points.contains_key(id))
            .collect();

        let mut removed_lines: HashSet<u64> = line_ids
            .iter()
            .copied()
            .filter(|id| self.lines.contains_key(id))
            .collect();
        removed_lines.extend(
            self.lines
                .values()
                .filter(|line| {
                    removed_points.contains(&line.start_id)
                        || removed_points.contains(&line.end_id)
                })
                .map(|line| line.id),
        );

        let mut removed_angles: HashSet<u64> = angle_ids
            .iter()
            .copied()
            .filter(|id| self.angles.contains_key(id))
            .collect();
        removed_angles.extend(
            self.angles
                .values()
                .filter(|angle| removed_lines.iter().any(|id| angle.references_line(*id)))
                .map(|angle| angle.id),
        );

        for id in &removed_angles {
            self.angles.remove(id);
        }
        for id in &removed_lines {
            self.lines.remove(id);
        }
        let mut all_removed_points: Vec<u64> = Vec::new();
        for id in &removed_points {
            if self.points.remove(id).is_some() {
                all_removed_points.push(*id);
            }
        }

        let circle_removed = remove_circle && self.circle.take().is_some();

        // Orphan-Sweep nur wenn sich der Liniengraph geändert hat
        if !removed_lines.is_empty() || !removed_points.is_empty() {
            all_removed_points.extend(self.sweep_orphan_points());
        }

        if !all_removed_points.is_empty() {
            self.rebuild_spatial_index();
        }

        let mut summary = RemovalSummary {
            points: all_removed_points,
            lines: removed_lines.into_iter().collect(),
            angles: removed_angles.into_iter().collect(),
            circle_removed,
        };
        summary.points.sort_unstable();
        summary.lines.sort_unstable();
        summary.angles.sort_unstable();
        summary
    }

    /// Entfernt Punkte ohne inzidente Linie (z.B. nach Tool-Wechsel).
    pub fn sweep_orphans(&mut self) -> RemovalSummary {
        let mut removed = self.sweep_orphan_points();
        if !removed.is_empty() {
            self.rebuild_spatial_index();
        }
        removed.sort_unstable();
        RemovalSummary {
            points: removed,
            ..Default::default()
        }
    }

    /// Entfernt alle Punkte ohne inzidente Linie und gibt deren IDs zurück.
    fn sweep_orphan_points(&mut self) -> Vec<u64> {
        let orphan_ids: Vec<u64> = self
            .points
            .keys()
            .copied()
            .filter(|id| !self.lines.values().any(|line| line.is_incident_to(*id)))
            .collect();

        for id in &orphan_ids {
            self.points.remove(id);
        }
        orphan_ids
    }

    /// Setzt alle Collections zurück; der ID-Zähler läuft weiter.
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.angles.clear();
        self.circle = None;
        self.spatial_index = SpatialIndex::empty();
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Baut den persistenten Spatial-Index aus den aktuellen Punkten neu auf.
    fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_points(&self.points);
    }

    /// Findet den nächstgelegenen Punkt zur Canvas-Position.
    pub fn nearest_point(&self, query: DVec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Prüft ob der Sketch irgendwelche Annotationen enthält
    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
            || !self.lines.is_empty()
            || !self.angles.is_empty()
            || self.circle.is_some()
    }

    /// Gibt `true` zurück, wenn der Sketch leer ist
    pub fn is_empty(&self) -> bool {
        !self.has_data()
    }
}

/// Ergebnis einer (kaskadierenden) Löschoperation.
#[derive(Debug, Clone, Default)]
pub struct RemovalSummary {
    /// Entfernte Punkt-IDs (inklusive Orphan-Sweep), sortiert
    pub points: Vec<u64>,
    /// Entfernte Linien-IDs, sortiert
    pub lines: Vec<u64>,
    /// Entfernte Winkel-IDs, sortiert
    pub angles: Vec<u64>,
    /// Ob der Referenzkreis entfernt wurde
    pub circle_removed: bool,
}

impl RemovalSummary {
    /// Prüft ob überhaupt etwas entfernt wurde.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.lines.is_empty()
            && self.angles.is_empty()
            && !self.circle_removed
    }
}
