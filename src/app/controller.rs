//! Editor-Controller für zentrale Event-Verarbeitung.

use super::{EditCommand, EditorIntent, EditorState};

/// Führt Intents über das Mapping aus und dispatcht die entstehenden
/// Commands an die Use-Cases.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Übersetzt einen Intent in Commands und führt sie der Reihe nach aus.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt einen einzelnen Command auf dem [`EditorState`] aus und
    /// protokolliert ihn.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::use_cases;

        match command {
            // === Zeichnen ===
            EditCommand::StartDraw { kind } => use_cases::drawing::start(state, kind),
            EditCommand::AppendDrawPoint { position } => {
                use_cases::drawing::append_point(state, position)
            }
            EditCommand::UpdateDrawPreview { position } => {
                use_cases::drawing::update_preview(state, position)
            }
            EditCommand::FinishDraw { width } => use_cases::drawing::finish(state, width),
            EditCommand::CancelDraw => use_cases::drawing::cancel(state),

            // === Editieren ===
            EditCommand::AttachChain { shape_id } => use_cases::editing::attach(state, shape_id),
            EditCommand::DetachChain => use_cases::editing::detach(state),
            EditCommand::BeginVertexMove { node_id } => {
                use_cases::editing::begin_move(state, node_id)
            }
            EditCommand::PreviewVertexMove { node_id, position } => {
                use_cases::editing::preview_move(state, node_id, position)
            }
            EditCommand::CommitVertexMove { node_id, position } => {
                use_cases::editing::commit_move(state, node_id, position)
            }
            EditCommand::DeleteVertex { node_id } => {
                use_cases::editing::delete_vertex(state, node_id)
            }
            EditCommand::PromoteMidpoint { node_id, position } => {
                use_cases::editing::promote_midpoint(state, node_id, position)
            }

            // === Shape-Bestand ===
            EditCommand::SetShapeWidth { shape_id, width } => {
                use_cases::shapes::set_width(state, shape_id, width)
            }
            EditCommand::RemoveShape { shape_id } => {
                use_cases::shapes::remove_shape(state, shape_id)
            }
            EditCommand::PickShape {
                position,
                max_distance_m,
            } => use_cases::shapes::pick_shape(state, position, max_distance_m),

            // === Datei-I/O ===
            EditCommand::LoadFile { path } => use_cases::file_io::load(state, &path)?,
            EditCommand::SaveFile { path } => use_cases::file_io::save(state, &path)?,
        }

        Ok(())
    }
}
