//! Der zentrale Shape-Bestand.
//!
//! Die [`ShapeMap`] besitzt alle Shapes, hält je Shape die abgeleitete
//! Randgeometrie aktuell und pflegt einen Spatial-Index über sämtliche
//! Stützpunkte. Mutationen laufen ausschließlich über diese Methoden,
//! damit Geometrie und Index nie auseinanderlaufen.

use indexmap::IndexMap;

use crate::geometry::{build_offset, BoundaryGeometry, GeometryError};

use super::geo::LatLng;
use super::projection::project;
use super::shape::{sanitize_width, Shape, ShapeKind};
use super::spatial::{SpatialIndex, SpatialMatch};

/// Bestand aller Shapes mit abgeleiteter Geometrie und Spatial-Index.
#[derive(Debug, Clone)]
pub struct ShapeMap {
    /// Shapes nach ID, in deterministischer Einfüge-Reihenfolge
    shapes: IndexMap<u64, Shape>,
    /// Abgeleitete Randgeometrie je Shape
    geometries: IndexMap<u64, BoundaryGeometry>,
    spatial_index: SpatialIndex,
}

impl Default for ShapeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeMap {
    /// Erstellt einen leeren Bestand.
    pub fn new() -> Self {
        Self {
            shapes: IndexMap::new(),
            geometries: IndexMap::new(),
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Legt ein neues Shape an und liefert seine ID.
    ///
    /// Die Breite wird bereinigt, die Randgeometrie sofort berechnet.
    /// Unter 2 Stützpunkten entsteht kein Shape.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        points: Vec<LatLng>,
        width: f64,
    ) -> Result<u64, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidGeometry(points.len()));
        }
        let id = self.next_shape_id();
        let shape = Shape::new(id, kind, points, width);
        log::info!(
            "Shape {} angelegt: {:?}, {} Stützpunkte, Breite {}",
            id,
            kind,
            shape.point_count(),
            shape.width
        );
        self.shapes.insert(id, shape);
        self.recompute_geometry(id);
        self.rebuild_spatial_index();
        Ok(id)
    }

    /// Entfernt ein Shape samt abgeleiteter Geometrie.
    pub fn remove_shape(&mut self, id: u64) -> Option<Shape> {
        let removed = self.shapes.shift_remove(&id);
        if removed.is_some() {
            self.geometries.shift_remove(&id);
            self.rebuild_spatial_index();
            log::info!("Shape {} entfernt", id);
        } else {
            log::debug!("Entfernen verworfen: Shape {} unbekannt", id);
        }
        removed
    }

    /// Ersetzt die Mittellinie eines Shapes.
    ///
    /// Unter 2 Punkten wird die Übernahme verweigert und der Bestand
    /// bleibt unverändert.
    pub fn set_points(&mut self, id: u64, points: Vec<LatLng>) -> bool {
        if points.len() < 2 {
            log::warn!(
                "Mittellinie von Shape {} nicht übernommen: nur {} Punkt(e)",
                id,
                points.len()
            );
            return false;
        }
        let Some(shape) = self.shapes.get_mut(&id) else {
            log::debug!("Mittellinie verworfen: Shape {} unbekannt", id);
            return false;
        };
        shape.points = points;
        self.recompute_geometry(id);
        self.rebuild_spatial_index();
        true
    }

    /// Setzt die Breite eines Shapes (mit Bereinigung) und zeichnet die
    /// Randgeometrie neu. Liefert die tatsächlich wirksame Breite.
    pub fn set_width(&mut self, id: u64, width: f64) -> Option<f64> {
        let shape = self.shapes.get_mut(&id)?;
        let (effective, _) = sanitize_width(width, shape.kind);
        shape.width = effective;
        // Breite ändert nur die abgeleitete Geometrie, nicht den Index.
        self.recompute_geometry(id);
        log::info!("Breite von Shape {} auf {} gesetzt", id, effective);
        Some(effective)
    }

    /// Shape nach ID.
    pub fn shape(&self, id: u64) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Abgeleitete Randgeometrie eines Shapes.
    pub fn geometry(&self, id: u64) -> Option<&BoundaryGeometry> {
        self.geometries.get(&id)
    }

    /// Iteriert über alle Shapes in Bestandsreihenfolge.
    pub fn shapes_iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Iteriert über alle Randgeometrien in Bestandsreihenfolge.
    pub fn geometries_iter(&self) -> impl Iterator<Item = (u64, &BoundaryGeometry)> {
        self.geometries.iter().map(|(id, g)| (*id, g))
    }

    /// Anzahl der Shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Gibt `true` zurück, wenn der Bestand leer ist.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Nächste freie Shape-ID.
    pub fn next_shape_id(&self) -> u64 {
        self.shapes.keys().max().map_or(1, |max| max + 1)
    }

    /// Findet den nächsten Stützpunkt zur Query-Koordinate.
    pub fn nearest_vertex(&self, query: LatLng) -> Option<SpatialMatch> {
        self.spatial_index.nearest(project(query))
    }

    /// Alle Stützpunkte im Umkreis, nach Distanz sortiert.
    pub fn vertices_within_radius(&self, query: LatLng, radius_m: f64) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(project(query), radius_m)
    }

    /// Baut den Spatial-Index über alle Stützpunkte neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_shapes(&self.shapes);
    }

    /// Berechnet die abgeleitete Geometrie eines Shapes neu.
    fn recompute_geometry(&mut self, id: u64) {
        let Some(shape) = self.shapes.get(&id) else {
            self.geometries.shift_remove(&id);
            return;
        };
        match build_offset(&shape.points, shape.width, shape.kind) {
            Ok(geometry) => {
                self.geometries.insert(id, geometry);
            }
            Err(e) => {
                log::warn!("Randgeometrie für Shape {} nicht berechenbar: {}", id, e);
                self.geometries.shift_remove(&id);
            }
        }
    }
}
