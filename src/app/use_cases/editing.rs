//! Use-Cases für Editiersitzungen: Chain anheften, Gesten, Ablösen.

use crate::app::state::{EditSession, EditorState, SessionMode};
use crate::core::LatLng;
use crate::edit::VertexChain;

/// Heftet die Editier-Chain an ein bestehendes Shape.
///
/// Eine laufende Editiersitzung wird vorher regulär abgelöst; ihre
/// Mittellinie bleibt dadurch erhalten.
pub fn attach(state: &mut EditorState, shape_id: u64) {
    if state.editing_shape_id() == Some(shape_id) {
        log::debug!("Shape {} ist bereits in Bearbeitung", shape_id);
        return;
    }
    if state.is_editing() {
        detach(state);
    }
    let Some(shape) = state.shapes.shape(shape_id).cloned() else {
        log::warn!("Editierstart verweigert: Shape {} unbekannt", shape_id);
        return;
    };
    match VertexChain::attach_for_shape(&shape, state.renderer.as_mut()) {
        Ok(chain) => {
            log::info!("Editiersitzung für Shape {} gestartet", shape_id);
            state.session = SessionMode::Editing(EditSession { shape_id, chain });
        }
        Err(e) => log::warn!("Editierstart für Shape {} fehlgeschlagen: {}", shape_id, e),
    }
}

/// Beendet die Editiersitzung und übernimmt die Mittellinie ins Shape.
pub fn detach(state: &mut EditorState) {
    let session = match std::mem::replace(&mut state.session, SessionMode::Idle) {
        SessionMode::Editing(session) => session,
        other => {
            log::debug!("Ablösen verworfen: keine Editiersitzung aktiv");
            state.session = other;
            return;
        }
    };
    let shape_id = session.shape_id;
    let points = session.chain.detach();
    if !state.shapes.set_points(shape_id, points) {
        log::warn!("Mittellinie von Shape {} nicht übernommen", shape_id);
    }
    log::info!("Editiersitzung für Shape {} beendet", shape_id);
}

/// Meldet den Beginn einer Drag-Geste an die Chain.
pub fn begin_move(state: &mut EditorState, node_id: u64) {
    let SessionMode::Editing(session) = &mut state.session else {
        log::debug!("Gestenbeginn verworfen: keine Editiersitzung aktiv");
        return;
    };
    session.chain.begin_move(node_id, state.renderer.as_mut());
}

/// Transiente Positionsvorschau während eines Drags.
pub fn preview_move(state: &mut EditorState, node_id: u64, position: LatLng) {
    let SessionMode::Editing(session) = &mut state.session else {
        log::debug!("Vorschau verworfen: keine Editiersitzung aktiv");
        return;
    };
    session
        .chain
        .preview_move(node_id, position, state.renderer.as_mut());
}

/// Committet eine Vertex-Verschiebung und zieht das Shape nach.
pub fn commit_move(state: &mut EditorState, node_id: u64, position: LatLng) {
    let SessionMode::Editing(session) = &mut state.session else {
        log::debug!("Commit verworfen: keine Editiersitzung aktiv");
        return;
    };
    if session
        .chain
        .move_vertex(node_id, position, state.renderer.as_mut())
    {
        sync_shape_from_chain(state);
    }
}

/// Löscht einen Vertex der Chain und zieht das Shape nach.
pub fn delete_vertex(state: &mut EditorState, node_id: u64) {
    let SessionMode::Editing(session) = &mut state.session else {
        log::debug!("Löschung verworfen: keine Editiersitzung aktiv");
        return;
    };
    if session.chain.delete_vertex(node_id, state.renderer.as_mut()) {
        sync_shape_from_chain(state);
    }
}

/// Befördert einen Midpoint zum Vertex und zieht das Shape nach.
pub fn promote_midpoint(state: &mut EditorState, node_id: u64, position: LatLng) {
    let SessionMode::Editing(session) = &mut state.session else {
        log::debug!("Promotion verworfen: keine Editiersitzung aktiv");
        return;
    };
    if session
        .chain
        .promote_midpoint(node_id, position, state.renderer.as_mut())
        .is_some()
    {
        sync_shape_from_chain(state);
    }
}

/// Übernimmt die aktuelle Mittellinie der Chain in das Shape.
///
/// Hält den Bestand nach jeder committeten Mutation konsistent, damit
/// Persistenz und Nachbar-Shapes nicht auf das Sitzungsende warten.
fn sync_shape_from_chain(state: &mut EditorState) {
    let SessionMode::Editing(session) = &state.session else {
        return;
    };
    let shape_id = session.shape_id;
    let points = session.chain.points();
    if !state.shapes.set_points(shape_id, points) {
        log::warn!("Mittellinie von Shape {} nicht übernommen", shape_id);
    }
}
