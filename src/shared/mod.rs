//! Geteilte Konfiguration für alle Schichten.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_SHAPE_WIDTH, MAX_SHAPE_WIDTH, PICK_RADIUS_M};
