//! Use-Cases auf dem Shape-Bestand: Breite, Entfernen, Picking.

use crate::app::state::{EditorState, SessionMode};
use crate::core::LatLng;

use super::editing;

/// Setzt die Breite eines Shapes (mit Bereinigung).
///
/// Läuft gerade eine Editiersitzung auf diesem Shape, zieht die Chain
/// mit, damit Randgeometrie und Handles konsistent bleiben.
pub fn set_width(state: &mut EditorState, shape_id: u64, width: f64) {
    let Some(effective) = state.shapes.set_width(shape_id, width) else {
        log::warn!("Breite nicht gesetzt: Shape {} unbekannt", shape_id);
        return;
    };
    if let SessionMode::Editing(session) = &mut state.session {
        if session.shape_id == shape_id {
            session.chain.set_width(effective, state.renderer.as_mut());
        }
    }
    log::info!("Breite von Shape {} auf {} gesetzt", shape_id, effective);
}

/// Entfernt ein Shape aus dem Bestand.
///
/// Eine noch laufende Editiersitzung auf diesem Shape wird verworfen,
/// ohne die Mittellinie zurückzuschreiben.
pub fn remove_shape(state: &mut EditorState, shape_id: u64) {
    if state.editing_shape_id() == Some(shape_id) {
        log::warn!("Shape {} wird während der Bearbeitung entfernt", shape_id);
        state.session = SessionMode::Idle;
    }
    if state.shapes.remove_shape(shape_id).is_none() {
        log::debug!("Entfernen verworfen: Shape {} unbekannt", shape_id);
        return;
    }
    log::info!("Shape {} entfernt", shape_id);
}

/// Startet per Nächster-Vertex-Suche eine Editiersitzung.
pub fn pick_shape(state: &mut EditorState, position: LatLng, max_distance_m: f64) {
    let Some(hit) = state.shapes.nearest_vertex(position) else {
        log::debug!("Pick ohne Treffer: Bestand leer");
        return;
    };
    if hit.distance > max_distance_m {
        log::debug!(
            "Pick ohne Treffer: nächster Vertex {:.1} m entfernt (Radius {} m)",
            hit.distance,
            max_distance_m
        );
        return;
    }
    editing::attach(state, hit.vertex.shape_id);
}
