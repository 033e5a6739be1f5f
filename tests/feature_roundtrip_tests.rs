use std::fs;
use std::path::PathBuf;

use map_shape_editor::json::parse_feature_collection;
use map_shape_editor::{
    EditCommand, EditorController, EditorIntent, EditorState, LatLng, SessionMode, ShapeKind,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn latlng(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng)
}

/// Eindeutiger Pfad pro Test, damit parallel laufende Tests sich nicht
/// gegenseitig die Dateien überschreiben.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("test_map_shape_editor_{name}"))
}

fn populated_state() -> EditorState {
    let mut state = EditorState::new();
    state
        .shapes
        .add_shape(
            ShapeKind::Arrow,
            vec![latlng(52.5, 13.4), latlng(52.6, 13.5), latlng(52.7, 13.5)],
            0.0,
        )
        .expect("Pfeil muss entstehen");
    state
        .shapes
        .add_shape(
            ShapeKind::Corridor,
            vec![
                latlng(48.1, 11.5),
                latlng(48.2, 11.6),
                latlng(48.3, 11.6),
                latlng(48.4, 11.7),
            ],
            250.5,
        )
        .expect("Korridor muss entstehen");
    state
}

// ═══════════════════════════════════════════════════════════════════
// Speichern und Laden über den Controller
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_save_then_load_roundtrip_through_controller() {
    init_logging();
    let path = temp_path("roundtrip.json");
    let path_str = path.display().to_string();

    let mut controller = EditorController::new();
    let mut source = populated_state();
    controller
        .handle_intent(
            &mut source,
            EditorIntent::SaveFileRequested {
                path: path_str.clone(),
            },
        )
        .expect("Speichern sollte funktionieren");

    let mut target = EditorState::new();
    controller
        .handle_intent(&mut target, EditorIntent::LoadFileRequested { path: path_str })
        .expect("Laden sollte funktionieren");

    assert_eq!(target.shapes.shape_count(), 2);
    for (a, b) in source.shapes.shapes_iter().zip(target.shapes.shapes_iter()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.width, b.width);
        assert_eq!(a.points, b.points, "Koordinaten bleiben exakt erhalten");
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn test_save_writes_parseable_feature_collection() {
    init_logging();
    let path = temp_path("wire_format.json");
    let path_str = path.display().to_string();

    let mut controller = EditorController::new();
    let mut state = populated_state();
    controller
        .handle_intent(&mut state, EditorIntent::SaveFileRequested { path: path_str })
        .expect("Speichern sollte funktionieren");

    let text = fs::read_to_string(&path).expect("Datei sollte lesbar sein");
    let records = parse_feature_collection(&text).expect("Datei ist eine Feature-Collection");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, ShapeKind::Arrow);
    assert_eq!(records[1].kind, ShapeKind::Corridor);
    assert_eq!(records[1].width, 250.5);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_replaces_existing_stock() {
    init_logging();
    let path = temp_path("replace.json");
    let path_str = path.display().to_string();

    let mut controller = EditorController::new();
    let mut source = populated_state();
    controller
        .handle_intent(
            &mut source,
            EditorIntent::SaveFileRequested {
                path: path_str.clone(),
            },
        )
        .expect("Speichern sollte funktionieren");

    let mut target = EditorState::new();
    target
        .shapes
        .add_shape(
            ShapeKind::Corridor,
            vec![latlng(0.0, 0.0), latlng(0.001, 0.0)],
            99.0,
        )
        .expect("Altbestand muss entstehen");

    controller
        .handle_intent(&mut target, EditorIntent::LoadFileRequested { path: path_str })
        .expect("Laden sollte funktionieren");

    assert_eq!(target.shapes.shape_count(), 2, "Altbestand wird ersetzt");
    assert!(target
        .shapes
        .shapes_iter()
        .all(|s| (s.width - 99.0).abs() > f64::EPSILON));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_while_drawing_cancels_session_first() {
    init_logging();
    let path = temp_path("cancel_first.json");
    let path_str = path.display().to_string();

    let mut controller = EditorController::new();
    let mut source = populated_state();
    controller
        .handle_intent(
            &mut source,
            EditorIntent::SaveFileRequested {
                path: path_str.clone(),
            },
        )
        .expect("Speichern sollte funktionieren");

    let mut target = EditorState::new();
    controller
        .handle_intent(
            &mut target,
            EditorIntent::DrawStartRequested {
                kind: ShapeKind::Arrow,
            },
        )
        .expect("DrawStartRequested sollte funktionieren");
    assert!(target.is_drawing());

    controller
        .handle_intent(&mut target, EditorIntent::LoadFileRequested { path: path_str })
        .expect("Laden sollte funktionieren");

    assert!(matches!(target.session, SessionMode::Idle));
    assert_eq!(target.shapes.shape_count(), 2);

    let entries = target.command_log.entries();
    let tail = &entries[entries.len() - 2..];
    assert!(matches!(tail[0], EditCommand::CancelDraw));
    assert!(matches!(tail[1], EditCommand::LoadFile { .. }));

    let _ = fs::remove_file(&path);
}

// ═══════════════════════════════════════════════════════════════════
// Fehlerpfade
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_load_missing_file_reports_error_and_keeps_stock() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = populated_state();

    let result = controller.handle_intent(
        &mut state,
        EditorIntent::LoadFileRequested {
            path: temp_path("does_not_exist.json").display().to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.shapes.shape_count(), 2, "Bestand bleibt unangetastet");
}

#[test]
fn test_load_malformed_file_reports_error_and_keeps_stock() {
    init_logging();
    let path = temp_path("malformed.json");
    fs::write(&path, "keine Feature-Collection").expect("Testdatei muss schreibbar sein");

    let mut controller = EditorController::new();
    let mut state = populated_state();
    let result = controller.handle_intent(
        &mut state,
        EditorIntent::LoadFileRequested {
            path: path.display().to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.shapes.shape_count(), 2, "Bestand bleibt unangetastet");

    let _ = fs::remove_file(&path);
}

#[test]
fn test_save_into_missing_directory_reports_error() {
    init_logging();
    let path = temp_path("no_such_dir").join("out.json");

    let mut controller = EditorController::new();
    let mut state = populated_state();
    let result = controller.handle_intent(
        &mut state,
        EditorIntent::SaveFileRequested {
            path: path.display().to_string(),
        },
    );

    assert!(result.is_err());
}
