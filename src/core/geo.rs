//! Geographische Basis-Typen.

use serde::{Deserialize, Serialize};

/// Geographische Koordinate in Grad (Breite, Länge).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Geographische Breite in Grad
    pub lat: f64,
    /// Geographische Länge in Grad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Koordinate aus Breite und Länge.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
