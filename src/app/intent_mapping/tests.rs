use crate::app::state::{EditSession, EditorState, SessionMode};
use crate::app::{EditCommand, EditorIntent, EditorKey};
use crate::core::{LatLng, ShapeKind};
use crate::edit::{DrawSession, NodeRole, NullObserver, VertexChain};

use super::map_intent_to_commands;

fn line(count: usize) -> Vec<LatLng> {
    (0..count)
        .map(|i| LatLng::new(i as f64 * 0.001, 0.0))
        .collect()
}

fn drawing_state() -> EditorState {
    let mut state = EditorState::new();
    state.session = SessionMode::Drawing(DrawSession::new(ShapeKind::Corridor));
    state
}

fn editing_state() -> EditorState {
    let mut state = EditorState::new();
    let shape_id = state
        .shapes
        .add_shape(ShapeKind::Corridor, line(4), 50.0)
        .expect("Shape muss entstehen");
    let shape = state
        .shapes
        .shape(shape_id)
        .cloned()
        .expect("Shape vorhanden");
    let chain =
        VertexChain::attach_for_shape(&shape, &mut NullObserver).expect("Chain muss entstehen");
    state.session = SessionMode::Editing(EditSession { shape_id, chain });
    state
}

fn editing_chain(state: &EditorState) -> &VertexChain {
    match &state.session {
        SessionMode::Editing(session) => &session.chain,
        _ => panic!("Editiersitzung erwartet"),
    }
}

fn first_midpoint(chain: &VertexChain) -> (u64, LatLng) {
    chain
        .node_handles()
        .into_iter()
        .find(|h| h.role == NodeRole::Midpoint)
        .map(|h| (h.id, h.position))
        .expect("Chain hat Midpoints")
}

#[test]
fn clicked_while_drawing_maps_to_append_point() {
    let state = drawing_state();
    let position = LatLng::new(1.0, 2.0);

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerClicked {
            position,
            target_node_id: None,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::AppendDrawPoint { position: p } if p == position
    ));
}

#[test]
fn clicked_while_idle_maps_to_nothing() {
    let state = EditorState::new();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerClicked {
            position: LatLng::new(0.0, 0.0),
            target_node_id: None,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn clicked_vertex_while_editing_maps_to_delete() {
    let state = editing_state();
    let vertex_id = editing_chain(&state)
        .vertex_id_at(1)
        .expect("Vertex an Index 1 vorhanden");

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerClicked {
            position: LatLng::new(0.0, 0.0),
            target_node_id: Some(vertex_id),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::DeleteVertex { node_id } if node_id == vertex_id
    ));
}

#[test]
fn clicked_midpoint_while_editing_promotes_at_resting_position() {
    let state = editing_state();
    let (mid_id, resting) = first_midpoint(editing_chain(&state));

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerClicked {
            position: LatLng::new(9.0, 9.0),
            target_node_id: Some(mid_id),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        EditCommand::BeginVertexMove { node_id } if node_id == mid_id
    ));
    assert!(matches!(
        commands[1],
        EditCommand::PromoteMidpoint { node_id, position }
            if node_id == mid_id && position == resting
    ));
}

#[test]
fn moved_while_drawing_maps_to_preview_update() {
    let state = drawing_state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerMoved {
            position: LatLng::new(0.5, 0.5),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], EditCommand::UpdateDrawPreview { .. }));
}

#[test]
fn moved_while_idle_maps_to_nothing() {
    let state = EditorState::new();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerMoved {
            position: LatLng::new(0.5, 0.5),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_started_while_editing_maps_to_begin_move() {
    let state = editing_state();
    let vertex_id = editing_chain(&state).vertex_id_at(0).expect("Vertex 0");

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerDragStarted { node_id: vertex_id },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::BeginVertexMove { node_id } if node_id == vertex_id
    ));
}

#[test]
fn dragged_vertex_maps_to_preview_move() {
    let state = editing_state();
    let vertex_id = editing_chain(&state).vertex_id_at(2).expect("Vertex 2");
    let position = LatLng::new(0.001, 0.002);

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerDragged {
            node_id: vertex_id,
            position,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::PreviewVertexMove { node_id, position: p }
            if node_id == vertex_id && p == position
    ));
}

#[test]
fn dragged_midpoint_maps_to_nothing() {
    let state = editing_state();
    let (mid_id, _) = first_midpoint(editing_chain(&state));

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerDragged {
            node_id: mid_id,
            position: LatLng::new(0.001, 0.002),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_ended_on_vertex_maps_to_commit() {
    let state = editing_state();
    let vertex_id = editing_chain(&state).vertex_id_at(1).expect("Vertex 1");
    let position = LatLng::new(0.003, 0.004);

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerDragEnded {
            node_id: vertex_id,
            position,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::CommitVertexMove { node_id, position: p }
            if node_id == vertex_id && p == position
    ));
}

#[test]
fn drag_ended_on_midpoint_promotes_at_drop_position() {
    let state = editing_state();
    let (mid_id, _) = first_midpoint(editing_chain(&state));
    let drop = LatLng::new(0.005, 0.006);

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PointerDragEnded {
            node_id: mid_id,
            position: drop,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::PromoteMidpoint { node_id, position }
            if node_id == mid_id && position == drop
    ));
}

#[test]
fn escape_while_drawing_finishes_without_width() {
    let state = drawing_state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::KeyPressed {
            key: EditorKey::Escape,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], EditCommand::FinishDraw { width: None }));
}

#[test]
fn escape_while_editing_maps_to_detach() {
    let state = editing_state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::KeyPressed {
            key: EditorKey::Escape,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], EditCommand::DetachChain));
}

#[test]
fn draw_start_while_editing_detaches_first() {
    let state = editing_state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::DrawStartRequested {
            kind: ShapeKind::Arrow,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], EditCommand::DetachChain));
    assert!(matches!(
        commands[1],
        EditCommand::StartDraw {
            kind: ShapeKind::Arrow
        }
    ));
}

#[test]
fn edit_start_while_drawing_cancels_first() {
    let state = drawing_state();

    let commands =
        map_intent_to_commands(&state, EditorIntent::EditStartRequested { shape_id: 7 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], EditCommand::CancelDraw));
    assert!(matches!(
        commands[1],
        EditCommand::AttachChain { shape_id: 7 }
    ));
}

#[test]
fn edit_start_for_already_edited_shape_maps_to_nothing() {
    let state = editing_state();
    let shape_id = state.editing_shape_id().expect("Sitzung läuft");

    let commands = map_intent_to_commands(&state, EditorIntent::EditStartRequested { shape_id });

    assert!(commands.is_empty());
}

#[test]
fn pick_requested_uses_pick_radius_from_options() {
    let mut state = EditorState::new();
    state.options.pick_radius_m = 7.5;

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PickShapeRequested {
            position: LatLng::new(0.0, 0.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditCommand::PickShape { max_distance_m, .. } if max_distance_m == 7.5
    ));
}

#[test]
fn pick_requested_while_drawing_maps_to_nothing() {
    let state = drawing_state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::PickShapeRequested {
            position: LatLng::new(0.0, 0.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn remove_requested_while_editing_same_shape_detaches_first() {
    let state = editing_state();
    let shape_id = state.editing_shape_id().expect("Sitzung läuft");

    let commands = map_intent_to_commands(&state, EditorIntent::RemoveShapeRequested { shape_id });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], EditCommand::DetachChain));
    assert!(matches!(
        commands[1],
        EditCommand::RemoveShape { shape_id: id } if id == shape_id
    ));
}

#[test]
fn load_requested_while_editing_detaches_first() {
    let state = editing_state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::LoadFileRequested {
            path: "shapes.json".to_string(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], EditCommand::DetachChain));
    assert!(matches!(commands[1], EditCommand::LoadFile { .. }));
}
