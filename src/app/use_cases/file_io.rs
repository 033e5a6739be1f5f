//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use anyhow::Context;

use crate::app::state::{EditorState, SessionMode};
use crate::json;

/// Lädt eine Feature-Collection und ersetzt den Shape-Bestand.
///
/// Eine noch laufende Sitzung wird verworfen; ungültige Einträge der
/// Datei sind beim Parsen bereits ausgefiltert.
pub fn load(state: &mut EditorState, path: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("{} nicht lesbar", path))?;
    let shapes = json::load_shape_map(&text)?;

    if !matches!(state.session, SessionMode::Idle) {
        log::warn!("Laufende Sitzung beim Laden verworfen");
        state.session = SessionMode::Idle;
    }

    log::info!("{} Shape(s) aus {} geladen", shapes.shape_count(), path);
    state.shapes = shapes;
    Ok(())
}

/// Speichert den Shape-Bestand als Feature-Collection.
///
/// Eine laufende Editiersitzung blockiert das Speichern nicht; committete
/// Mutationen sind zu diesem Zeitpunkt bereits im Bestand.
pub fn save(state: &EditorState, path: &str) -> anyhow::Result<()> {
    let text = json::export_shape_map(&state.shapes)?;
    std::fs::write(path, text).with_context(|| format!("{} nicht schreibbar", path))?;

    log::info!(
        "{} Shape(s) nach {} gespeichert",
        state.shapes.shape_count(),
        path
    );
    Ok(())
}
