//! Sphärische Web-Mercator-Projektion (EPSG:3857-äquivalent).
//!
//! Alle Offset-Berechnungen laufen in planaren Metern; diese Funktionen
//! bilden geographische Koordinaten dorthin ab und zurück. Breiten werden
//! auf ±85.0511287798 Grad begrenzt, die Pole liegen außerhalb des
//! Definitionsbereichs.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use super::geo::LatLng;

/// Planarer Punkt in Metern (Ergebnis der Projektion).
pub type PlanarPoint = DVec2;

/// Erdradius der sphärischen Mercator-Projektion in Metern.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Maximale abbildbare Breite in Grad.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Projiziert eine geographische Koordinate in planare Meter.
pub fn project(p: LatLng) -> PlanarPoint {
    let lat = p.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = lat.to_radians().sin();
    DVec2::new(
        EARTH_RADIUS * p.lng.to_radians(),
        EARTH_RADIUS * ((1.0 + sin) / (1.0 - sin)).ln() / 2.0,
    )
}

/// Rechnet einen planaren Punkt zurück in geographische Koordinaten.
pub fn unproject(q: PlanarPoint) -> LatLng {
    LatLng::new(
        (2.0 * (q.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees(),
        (q.x / EARTH_RADIUS).to_degrees(),
    )
}

/// Projizierter Mittelpunkt zweier Koordinaten.
///
/// Gemittelt wird im planaren Raum, nicht im Gradraum. Der Punkt liegt
/// damit unter der aktiven Projektion optisch mittig zwischen beiden.
pub fn projected_midpoint(a: LatLng, b: LatLng) -> LatLng {
    unproject((project(a) + project(b)) * 0.5)
}
