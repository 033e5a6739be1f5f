//! Core-Domäne: Koordinaten, Projektion, Shapes und Spatial-Index.

pub mod geo;
pub mod projection;
pub mod shape;
pub mod shape_map;
pub mod spatial;

pub use geo::LatLng;
pub use projection::{project, projected_midpoint, unproject, PlanarPoint, EARTH_RADIUS, MAX_LATITUDE};
pub use shape::{sanitize_width, Shape, ShapeKind, WidthCorrection};
pub use shape_map::ShapeMap;
pub use spatial::{SpatialIndex, SpatialMatch, VertexRef};
