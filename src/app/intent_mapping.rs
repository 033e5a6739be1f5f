//! Übersetzung von UI-Intents in mutierende Edit-Commands.
//!
//! Der Sitzungsmodus entscheidet, welche Commands ein Pointer-Intent
//! ergibt. Moduswechsel beenden die laufende Sitzung zuerst, damit jeder
//! Command auf einem eindeutigen Modus arbeitet.

use super::state::SessionMode;
use super::{EditCommand, EditorIntent, EditorKey, EditorState};

/// Bildet einen `EditorIntent` auf die dafür auszuführenden
/// `EditCommand`s ab.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditCommand> {
    match intent {
        EditorIntent::PointerClicked {
            position,
            target_node_id,
        } => match &state.session {
            SessionMode::Drawing(_) => vec![EditCommand::AppendDrawPoint { position }],
            SessionMode::Editing(session) => match target_node_id {
                Some(id) if session.chain.is_vertex(id) => {
                    vec![EditCommand::DeleteVertex { node_id: id }]
                }
                // Klick auf einen Midpoint befördert ihn an seiner
                // Ruheposition; die Geste beginnt wie ein Drag.
                Some(id) => match session.chain.midpoint(id) {
                    Some(mid) => vec![
                        EditCommand::BeginVertexMove { node_id: id },
                        EditCommand::PromoteMidpoint {
                            node_id: id,
                            position: mid.position,
                        },
                    ],
                    None => Vec::new(),
                },
                None => Vec::new(),
            },
            SessionMode::Idle => Vec::new(),
        },
        EditorIntent::PointerMoved { position } => match &state.session {
            SessionMode::Drawing(_) => vec![EditCommand::UpdateDrawPreview { position }],
            _ => Vec::new(),
        },
        EditorIntent::PointerDragStarted { node_id } => match &state.session {
            SessionMode::Editing(_) => vec![EditCommand::BeginVertexMove { node_id }],
            _ => Vec::new(),
        },
        EditorIntent::PointerDragged { node_id, position } => match &state.session {
            SessionMode::Editing(session) if session.chain.is_vertex(node_id) => {
                vec![EditCommand::PreviewVertexMove { node_id, position }]
            }
            // Midpoints zeigen während des Drags keine Vorschau; die
            // Beförderung passiert erst beim Loslassen.
            _ => Vec::new(),
        },
        EditorIntent::PointerDragEnded { node_id, position } => match &state.session {
            SessionMode::Editing(session) if session.chain.is_vertex(node_id) => {
                vec![EditCommand::CommitVertexMove { node_id, position }]
            }
            SessionMode::Editing(session) if session.chain.is_midpoint(node_id) => {
                vec![EditCommand::PromoteMidpoint { node_id, position }]
            }
            _ => Vec::new(),
        },
        EditorIntent::KeyPressed {
            key: EditorKey::Escape,
        } => match &state.session {
            SessionMode::Drawing(_) => vec![EditCommand::FinishDraw { width: None }],
            SessionMode::Editing(_) => vec![EditCommand::DetachChain],
            SessionMode::Idle => Vec::new(),
        },
        EditorIntent::DrawStartRequested { kind } => match &state.session {
            SessionMode::Drawing(_) => {
                vec![EditCommand::CancelDraw, EditCommand::StartDraw { kind }]
            }
            SessionMode::Editing(_) => {
                vec![EditCommand::DetachChain, EditCommand::StartDraw { kind }]
            }
            SessionMode::Idle => vec![EditCommand::StartDraw { kind }],
        },
        EditorIntent::DrawFinishRequested { width } => {
            if state.is_drawing() {
                vec![EditCommand::FinishDraw { width: Some(width) }]
            } else {
                Vec::new()
            }
        }
        EditorIntent::DrawCancelRequested => {
            if state.is_drawing() {
                vec![EditCommand::CancelDraw]
            } else {
                Vec::new()
            }
        }
        EditorIntent::EditStartRequested { shape_id } => match &state.session {
            SessionMode::Editing(session) if session.shape_id == shape_id => Vec::new(),
            SessionMode::Editing(_) => vec![
                EditCommand::DetachChain,
                EditCommand::AttachChain { shape_id },
            ],
            SessionMode::Drawing(_) => vec![
                EditCommand::CancelDraw,
                EditCommand::AttachChain { shape_id },
            ],
            SessionMode::Idle => vec![EditCommand::AttachChain { shape_id }],
        },
        EditorIntent::EditStopRequested => {
            if state.is_editing() {
                vec![EditCommand::DetachChain]
            } else {
                Vec::new()
            }
        }
        EditorIntent::PickShapeRequested { position } => {
            if state.is_drawing() {
                Vec::new()
            } else {
                vec![EditCommand::PickShape {
                    position,
                    max_distance_m: state.options.pick_radius_m,
                }]
            }
        }
        EditorIntent::SetWidthRequested { shape_id, width } => {
            vec![EditCommand::SetShapeWidth { shape_id, width }]
        }
        EditorIntent::RemoveShapeRequested { shape_id } => {
            if state.editing_shape_id() == Some(shape_id) {
                vec![
                    EditCommand::DetachChain,
                    EditCommand::RemoveShape { shape_id },
                ]
            } else {
                vec![EditCommand::RemoveShape { shape_id }]
            }
        }
        EditorIntent::LoadFileRequested { path } => match &state.session {
            SessionMode::Drawing(_) => {
                vec![EditCommand::CancelDraw, EditCommand::LoadFile { path }]
            }
            SessionMode::Editing(_) => {
                vec![EditCommand::DetachChain, EditCommand::LoadFile { path }]
            }
            SessionMode::Idle => vec![EditCommand::LoadFile { path }],
        },
        EditorIntent::SaveFileRequested { path } => vec![EditCommand::SaveFile { path }],
    }
}

#[cfg(test)]
mod tests;
