//! Spatial-Index (KD-Tree) für schnelle Vertex-Abfragen.

use glam::DVec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use super::projection::project;
use super::shape::Shape;

/// Verweis auf einen Stützpunkt eines Shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    /// ID des besitzenden Shapes
    pub shape_id: u64,
    /// Index des Stützpunkts in dessen Mittellinie
    pub vertex_index: usize,
}

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Gefundener Stützpunkt
    pub vertex: VertexRef,
    /// Euklidische Distanz zum Suchpunkt in planaren Metern
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Stützpunkten einer ShapeMap.
///
/// Indexiert werden die projizierten Mittellinien; Abfragen rechnen damit
/// in planaren Metern.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    entries: Vec<VertexRef>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entries: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus allen Stützpunkten der Shapes.
    pub fn from_shapes(shapes: &IndexMap<u64, Shape>) -> Self {
        let mut entries = Vec::new();
        let mut coords: Vec<[f64; 2]> = Vec::new();

        for (id, shape) in shapes {
            for (vertex_index, point) in shape.points.iter().enumerate() {
                let p = project(*point);
                entries.push(VertexRef {
                    shape_id: *id,
                    vertex_index,
                });
                coords.push([p.x, p.y]);
            }
        }

        Self {
            tree: (&coords).into(),
            entries,
        }
    }

    /// Gibt die Anzahl indexierter Stützpunkte zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn der Index leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Findet den nächsten Stützpunkt zur planaren Query-Position.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let vertex = *self.entries.get(result.item as usize)?;

        Some(SpatialMatch {
            vertex,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Stützpunkte innerhalb eines Radius, nach Distanz
    /// aufsteigend sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let vertex = *self.entries.get(entry.item as usize)?;
                Some(SpatialMatch {
                    vertex,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}
