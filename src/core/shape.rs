//! Shape-Domänentypen: Familie, Breitenpolitik und das gespeicherte Shape.

use serde::{Deserialize, Serialize};

use crate::shared::options::{DEFAULT_SHAPE_WIDTH, MAX_SHAPE_WIDTH};

use super::geo::LatLng;

/// Shape-Familie: Richtungspfeil oder paralleles Korridor-Band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Pfeil: geschlossener Umriss mit Kopf, Breite 0 = Mittellinie + Symbol
    Arrow,
    /// Korridor: zwei parallele Randkurven
    Corridor,
}

/// Grund einer Breitenkorrektur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthCorrection {
    /// Breite war NaN oder unendlich
    NotFinite,
    /// Breite war negativ
    Negative,
    /// Breite 0 ist nur für Pfeile gültig
    Zero,
    /// Breite über dem Maximum
    AboveMaximum,
}

/// Prüft eine Breite gegen die Politik der Shape-Familie.
///
/// Ungültige Breiten werden durch [`DEFAULT_SHAPE_WIDTH`] ersetzt und der
/// Korrekturgrund zurückgegeben. Breite 0 ist für Pfeile erlaubt
/// (Dekorator-Modus: Mittellinie plus Richtungssymbol), für Korridore nicht.
pub fn sanitize_width(width: f64, kind: ShapeKind) -> (f64, Option<WidthCorrection>) {
    let correction = if !width.is_finite() {
        Some(WidthCorrection::NotFinite)
    } else if width < 0.0 {
        Some(WidthCorrection::Negative)
    } else if width == 0.0 && kind == ShapeKind::Corridor {
        Some(WidthCorrection::Zero)
    } else if width > MAX_SHAPE_WIDTH {
        Some(WidthCorrection::AboveMaximum)
    } else {
        None
    };

    match correction {
        Some(reason) => {
            log::warn!(
                "Ungültige Breite {} für {:?} ({:?}), ersetzt durch {}",
                width,
                kind,
                reason,
                DEFAULT_SHAPE_WIDTH
            );
            (DEFAULT_SHAPE_WIDTH, Some(reason))
        }
        None => (width, None),
    }
}

/// Ein gespeichertes Shape: Mittellinie in Zeichenreihenfolge plus Breite.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Eindeutige ID innerhalb der ShapeMap
    pub id: u64,
    /// Shape-Familie
    pub kind: ShapeKind,
    /// Stützpunkte der Mittellinie
    pub points: Vec<LatLng>,
    /// Breite in Metern (bereinigt)
    pub width: f64,
}

impl Shape {
    /// Erstellt ein Shape; die Breite wird dabei bereinigt.
    pub fn new(id: u64, kind: ShapeKind, points: Vec<LatLng>, width: f64) -> Self {
        let (width, _) = sanitize_width(width, kind);
        Self {
            id,
            kind,
            points,
            width,
        }
    }

    /// Anzahl der Stützpunkte der Mittellinie.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
