//! Laden und Speichern des Shape-Bestands als JSON.
//!
//! Das Austauschformat ist ein Array von [`FeatureRecord`]s; Shape-IDs
//! sind flüchtig und werden beim Laden neu vergeben.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{LatLng, Shape, ShapeKind, ShapeMap};

/// Persistierte Form eines Shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Shape-Familie ("arrow" oder "corridor")
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Mittellinie in Zeichenreihenfolge
    pub points: Vec<LatLng>,
    /// Breite in Metern
    pub width: f64,
}

impl FeatureRecord {
    /// Baut ein Record aus einem gespeicherten Shape.
    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            kind: shape.kind,
            points: shape.points.clone(),
            width: shape.width,
        }
    }
}

/// Parst eine Feature-Collection (JSON-Array von Records).
pub fn parse_feature_collection(json: &str) -> anyhow::Result<Vec<FeatureRecord>> {
    serde_json::from_str(json).context("Feature-Collection nicht lesbar")
}

/// Serialisiert Records als JSON-Array.
pub fn write_feature_collection(records: &[FeatureRecord]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(records).context("Feature-Collection nicht serialisierbar")
}

/// Lädt eine Feature-Collection in eine frische ShapeMap.
///
/// Records unter 2 Punkten werden mit Warnung übersprungen, ungültige
/// Breiten beim Anlegen bereinigt; der Rest des Bestands bleibt nutzbar.
pub fn load_shape_map(json: &str) -> anyhow::Result<ShapeMap> {
    let records = parse_feature_collection(json)?;
    let mut map = ShapeMap::new();
    for (i, record) in records.into_iter().enumerate() {
        if let Err(e) = map.add_shape(record.kind, record.points, record.width) {
            log::warn!("Record {} übersprungen: {}", i, e);
        }
    }
    log::info!("{} Shapes geladen", map.shape_count());
    Ok(map)
}

/// Exportiert den gesamten Bestand als Feature-Collection.
pub fn export_shape_map(map: &ShapeMap) -> anyhow::Result<String> {
    let records: Vec<FeatureRecord> = map.shapes_iter().map(FeatureRecord::from_shape).collect();
    write_feature_collection(&records)
}
