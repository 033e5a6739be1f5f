//! Use-Cases für Zeichensitzungen: Starten, Punkte anhängen, Abschluss.

use crate::app::state::{EditorState, SessionMode};
use crate::core::{LatLng, ShapeKind};
use crate::edit::DrawSession;

/// Startet eine neue Zeichensitzung.
///
/// Verweigert, wenn bereits eine Sitzung läuft; das Intent-Mapping
/// beendet laufende Sitzungen vor dem Start.
pub fn start(state: &mut EditorState, kind: ShapeKind) {
    if !matches!(state.session, SessionMode::Idle) {
        log::warn!("Zeichenstart verweigert: es läuft bereits eine Sitzung");
        return;
    }
    state.session = SessionMode::Drawing(DrawSession::new(kind));
    log::info!("Zeichensitzung gestartet ({:?})", kind);
}

/// Hängt einen Stützpunkt an die entstehende Mittellinie an.
pub fn append_point(state: &mut EditorState, position: LatLng) {
    let SessionMode::Drawing(session) = &mut state.session else {
        log::debug!("Punkt verworfen: keine Zeichensitzung aktiv");
        return;
    };
    session.add_point(position);
}

/// Aktualisiert den Vorschaupunkt unter dem Cursor.
pub fn update_preview(state: &mut EditorState, position: LatLng) {
    if let SessionMode::Drawing(session) = &mut state.session {
        session.update_preview(position);
    }
}

/// Schließt die Zeichensitzung ab und legt das Shape an.
///
/// Ohne explizite Breite gilt die Standardbreite aus den Optionen.
/// Unter 2 Punkten wird der Abschluss verweigert und die Sitzung
/// läuft unverändert weiter.
pub fn finish(state: &mut EditorState, width: Option<f64>) {
    let session = match std::mem::replace(&mut state.session, SessionMode::Idle) {
        SessionMode::Drawing(session) => session,
        other => {
            log::debug!("Abschluss verworfen: keine Zeichensitzung aktiv");
            state.session = other;
            return;
        }
    };
    let Some(points) = session.finished_points() else {
        log::debug!("Abschluss verweigert: unter 2 Stützpunkten");
        state.session = SessionMode::Drawing(session);
        return;
    };
    let width = width.unwrap_or(state.options.default_draw_width);
    match state.shapes.add_shape(session.kind(), points, width) {
        Ok(id) => log::info!("Zeichensitzung abgeschlossen: Shape {}", id),
        Err(e) => log::warn!("Zeichensitzung ergab kein Shape: {}", e),
    }
}

/// Verwirft die laufende Zeichensitzung ersatzlos.
pub fn cancel(state: &mut EditorState) {
    if matches!(state.session, SessionMode::Drawing(_)) {
        state.session = SessionMode::Idle;
        log::info!("Zeichensitzung abgebrochen");
    }
}
