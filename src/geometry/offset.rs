//! Offset-Geometrie für breitenbehaftete Mittellinien.
//!
//! Der Builder projiziert die Mittellinie in planare Meter, versetzt sie
//! beidseitig um die halbe Breite und rechnet das Ergebnis zurück in
//! geographische Koordinaten. An Innenknicken wird der Versatz entlang der
//! Winkelhalbierenden verlängert (Miter) und gegen spitze Kehren auf das
//! [`MITER_LIMIT`]-fache der halben Breite begrenzt.
//!
//! Peilungen folgen der Kompasskonvention: 0 = Nord, positiv im
//! Uhrzeigersinn, Wertebereich [0, 2π).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec2;
use thiserror::Error;

use crate::core::geo::LatLng;
use crate::core::projection::{project, unproject, PlanarPoint};
use crate::core::shape::{sanitize_width, ShapeKind};
use crate::shared::options::{ARROW_LENGTH_FACTOR, ARROW_WING_FACTOR, MITER_LIMIT};

/// Fehler des Offset-Builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Eine Mittellinie braucht mindestens zwei Stützpunkte.
    #[error("ungültige Geometrie: mindestens 2 Stützpunkte erforderlich, erhalten {0}")]
    InvalidGeometry(usize),
}

/// Richtungssymbol am Ende einer Mittellinie (Pfeil mit Breite 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadMarker {
    /// Position der Spitze (letzter Stützpunkt)
    pub position: LatLng,
    /// Peilung des letzten Segments in Radiant, [0, 2π), 0 = Nord
    pub heading: f64,
}

/// Ergebnis des Offset-Builders.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryGeometry {
    /// Zwei parallele Randkurven (Korridor); je Kurve ein Punkt pro
    /// Stützpunkt der Mittellinie.
    Bands {
        left: Vec<LatLng>,
        right: Vec<LatLng>,
    },
    /// Geschlossener Pfeil-Umriss inklusive Kopf; bei n Stützpunkten
    /// genau 2n + 3 Punkte.
    Outline { ring: Vec<LatLng> },
    /// Mittellinie plus Richtungssymbol (Pfeil mit Breite 0).
    Decorated {
        centerline: Vec<LatLng>,
        head: HeadMarker,
    },
}

/// Peilung des Segments `from -> to` in Radiant, [0, 2π).
fn heading(from: PlanarPoint, to: PlanarPoint) -> f64 {
    ((to.x - from.x).atan2(to.y - from.y) + TAU) % TAU
}

/// Einheitsvektor zu einer Peilung.
fn bearing_dir(theta: f64) -> DVec2 {
    DVec2::new(theta.sin(), theta.cos())
}

/// Begrenzt die Miter-Länge auf das [`MITER_LIMIT`]-fache der halben
/// Breite. Das Vorzeichen bleibt erhalten; NaN (degenerierte Kehre bei
/// Breite 0) fällt auf die Obergrenze.
fn clamp_miter(length: f64, half_width: f64) -> f64 {
    let limit = MITER_LIMIT * half_width;
    if length.is_nan() {
        limit
    } else {
        length.clamp(-limit, limit)
    }
}

/// Berechnet linke und rechte Randkurve in planaren Metern.
///
/// Endpunkte werden senkrecht zum jeweils einzigen Segment versetzt.
/// Innenpunkte liegen auf der Winkelhalbierenden von ein- und
/// auslaufendem Segment; der vorzeichenbehaftete Halbwinkel sorgt dafür,
/// dass Links- und Rechtskurven dieselbe Formel teilen.
fn offset_sides(projected: &[PlanarPoint], half_width: f64) -> (Vec<PlanarPoint>, Vec<PlanarPoint>) {
    let n = projected.len();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);

    let first = heading(projected[0], projected[1]);
    left.push(projected[0] + half_width * bearing_dir(first + FRAC_PI_2));
    right.push(projected[0] + half_width * bearing_dir(first - FRAC_PI_2));

    for i in 0..n.saturating_sub(2) {
        let theta_in = heading(projected[i], projected[i + 1]);
        let theta_out = heading(projected[i + 1], projected[i + 2]);
        let turn = (theta_in - theta_out).rem_euclid(TAU);
        let alpha = (PI - turn) / 2.0;
        let miter = clamp_miter(half_width / alpha.sin(), half_width);
        left.push(projected[i + 1] + miter * bearing_dir(theta_in + alpha));
        right.push(projected[i + 1] + miter * bearing_dir(theta_out - alpha));
    }

    let last = heading(projected[n - 2], projected[n - 1]);
    left.push(projected[n - 1] + half_width * bearing_dir(last + FRAC_PI_2));
    right.push(projected[n - 1] + half_width * bearing_dir(last - FRAC_PI_2));

    (left, right)
}

/// Setzt den geschlossenen Pfeil-Umriss zusammen: linke Kurve, linker
/// Flügel, Spitze, rechter Flügel, rechte Kurve rückwärts.
fn assemble_arrow_ring(
    projected: &[PlanarPoint],
    left: Vec<PlanarPoint>,
    mut right: Vec<PlanarPoint>,
    half_width: f64,
) -> Vec<PlanarPoint> {
    let tail = projected[projected.len() - 1];
    let theta = heading(projected[projected.len() - 2], tail);

    let mut ring = left;
    ring.push(tail + ARROW_WING_FACTOR * half_width * bearing_dir(theta + FRAC_PI_2));
    ring.push(tail + ARROW_LENGTH_FACTOR * half_width * bearing_dir(theta));
    ring.push(tail + ARROW_WING_FACTOR * half_width * bearing_dir(theta - FRAC_PI_2));
    right.reverse();
    ring.extend(right);
    ring
}

/// Baut die Randgeometrie eines Shapes aus Mittellinie, Breite und Familie.
///
/// Unter 2 Stützpunkten gibt es keine Richtung und damit keine Geometrie:
/// [`GeometryError::InvalidGeometry`]. Die Breite wird vor der Berechnung
/// über [`sanitize_width`] bereinigt; ein Pfeil mit Breite 0 liefert statt
/// eines Umrisses die Mittellinie mit Richtungssymbol.
pub fn build_offset(
    points: &[LatLng],
    width: f64,
    kind: ShapeKind,
) -> Result<BoundaryGeometry, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::InvalidGeometry(points.len()));
    }
    let (width, _) = sanitize_width(width, kind);

    let projected: Vec<PlanarPoint> = points.iter().map(|p| project(*p)).collect();

    if kind == ShapeKind::Arrow && width == 0.0 {
        let n = projected.len();
        return Ok(BoundaryGeometry::Decorated {
            centerline: points.to_vec(),
            head: HeadMarker {
                position: points[n - 1],
                heading: heading(projected[n - 2], projected[n - 1]),
            },
        });
    }

    let half_width = width / 2.0;
    let (left, right) = offset_sides(&projected, half_width);

    match kind {
        ShapeKind::Corridor => Ok(BoundaryGeometry::Bands {
            left: left.into_iter().map(unproject).collect(),
            right: right.into_iter().map(unproject).collect(),
        }),
        ShapeKind::Arrow => {
            let ring = assemble_arrow_ring(&projected, left, right, half_width);
            Ok(BoundaryGeometry::Outline {
                ring: ring.into_iter().map(unproject).collect(),
            })
        }
    }
}
