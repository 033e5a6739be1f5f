//! Zentrale Konfiguration für den Shape-Editor.
//!
//! `EditorOptions` enthält die zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Breitenpolitik ──────────────────────────────────────────────────

/// Ersatzbreite für ungültige Breiten in Metern.
pub const DEFAULT_SHAPE_WIDTH: f64 = 1000.0;
/// Maximale akzeptierte Breite in Metern.
pub const MAX_SHAPE_WIDTH: f64 = 1_000_000.0;

// ── Offset-Geometrie ────────────────────────────────────────────────

/// Obergrenze der Miter-Länge als Vielfaches der halben Breite.
pub const MITER_LIMIT: f64 = 4.0;
/// Länge der Pfeilspitze als Vielfaches der halben Breite.
pub const ARROW_LENGTH_FACTOR: f64 = 3.0;
/// Auslage der Pfeilflügel als Vielfaches der halben Breite.
pub const ARROW_WING_FACTOR: f64 = 2.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius für die Shape-Auswahl in planaren Metern.
pub const PICK_RADIUS_M: f64 = 25.0;
/// Breite beim Zeichnungsabschluss ohne Angabe (0 = Pfeil-Dekorator).
pub const DEFAULT_DRAW_WIDTH: f64 = 0.0;

// ── Renderer-Hinweise ───────────────────────────────────────────────

/// Größe des Richtungssymbols in Screen-Pixeln.
pub const HEAD_PIXEL_SIZE: f32 = 15.0;
/// Linienstärke der Mittellinie in Screen-Pixeln.
pub const CENTERLINE_STROKE_PX: f32 = 2.0;
/// Deckkraft der Midpoint-Handles.
pub const MIDPOINT_OPACITY: f32 = 0.6;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `map_shape_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für die Shape-Auswahl in planaren Metern
    pub pick_radius_m: f64,
    /// Breite beim Zeichnungsabschluss ohne Angabe
    #[serde(default = "default_draw_width")]
    pub default_draw_width: f64,

    // ── Renderer-Hinweise ───────────────────────────────────────
    /// Größe des Richtungssymbols in Screen-Pixeln
    pub head_pixel_size: f32,
    /// Linienstärke der Mittellinie in Screen-Pixeln
    pub centerline_stroke_px: f32,
    /// Deckkraft der Midpoint-Handles
    #[serde(default = "default_midpoint_opacity")]
    pub midpoint_opacity: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius_m: PICK_RADIUS_M,
            default_draw_width: DEFAULT_DRAW_WIDTH,
            head_pixel_size: HEAD_PIXEL_SIZE,
            centerline_stroke_px: CENTERLINE_STROKE_PX,
            midpoint_opacity: MIDPOINT_OPACITY,
        }
    }
}

/// Serde-Default für `default_draw_width` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_draw_width() -> f64 {
    DEFAULT_DRAW_WIDTH
}

/// Serde-Default für `midpoint_opacity` (Abwärtskompatibilität).
fn default_midpoint_opacity() -> f32 {
    MIDPOINT_OPACITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_shape_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_shape_editor.toml")
    }
}
