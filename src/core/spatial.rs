//! Spatial-Index (KD-Tree) für schnelle Punkt-Abfragen.

use std::collections::HashMap;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::SketchPoint;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Punkts
    pub point_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Punkten eines Sketch.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Punkten.
    pub fn from_points(points: &HashMap<u64, SketchPoint>) -> Self {
        let mut point_ids: Vec<u64> = points.keys().copied().collect();
        point_ids.sort_unstable();

        let entries: Vec<[f64; 2]> = point_ids
            .iter()
            .filter_map(|id| {
                points
                    .get(id)
                    .map(|point| [point.position.x, point.position.y])
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, point_ids }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Canvas-Position.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance: result.distance.sqrt(),
        })
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
