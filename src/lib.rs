//! Geometrie- und Editing-Kern für breitenbehaftete Karten-Shapes.
//! Die Library trägt den kompletten Kern; Host-Anwendungen bringen nur
//! Darstellung und Eingabe mit.

pub mod app;
pub mod core;
pub mod edit;
pub mod geometry;
pub mod json;
pub mod shared;

pub use app::{
    CommandLog, EditCommand, EditSession, EditorController, EditorIntent, EditorKey, EditorState,
    SessionMode,
};
pub use core::{
    project, projected_midpoint, unproject, LatLng, PlanarPoint, Shape, ShapeKind, ShapeMap,
    SpatialIndex, SpatialMatch,
};
pub use edit::{
    ChainObserver, ChainProfile, DrawSession, NodeHandle, NodeRole, NullObserver, VertexChain,
};
pub use geometry::{build_offset, BoundaryGeometry, GeometryError, HeadMarker};
pub use json::{export_shape_map, load_shape_map};
pub use shared::EditorOptions;
