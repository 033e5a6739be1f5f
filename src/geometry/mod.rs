//! Geometrie-Schicht: Offset-Kurven, Pfeilköpfe und deren Fehler.

pub mod offset;

pub use offset::{build_offset, BoundaryGeometry, GeometryError, HeadMarker};
