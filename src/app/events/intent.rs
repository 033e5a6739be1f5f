use crate::core::{LatLng, ShapeKind};

/// Taste mit fester Editor-Bedeutung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Schliesst die Zeichensitzung ab bzw. beendet die Editiersitzung
    Escape,
}

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Intents sind modusfrei formuliert; erst das Mapping entscheidet
/// anhand des Sitzungsmodus, welche Commands daraus werden.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Klick in die Karte (target = getroffener Editier-Handle, falls einer)
    PointerClicked {
        position: LatLng,
        target_node_id: Option<u64>,
    },
    /// Cursor bewegt (treibt die Zeichenvorschau)
    PointerMoved { position: LatLng },
    /// Drag auf einem Editier-Handle begonnen
    PointerDragStarted { node_id: u64 },
    /// Drag-Position aktualisiert
    PointerDragged { node_id: u64, position: LatLng },
    /// Drag beendet (Handle losgelassen)
    PointerDragEnded { node_id: u64, position: LatLng },
    /// Taste gedrückt
    KeyPressed { key: EditorKey },
    /// Neue Zeichensitzung für eine Shape-Familie starten
    DrawStartRequested { kind: ShapeKind },
    /// Zeichensitzung mit expliziter Breite abschließen
    DrawFinishRequested { width: f64 },
    /// Zeichensitzung ersatzlos verwerfen
    DrawCancelRequested,
    /// Editiersitzung für ein bestimmtes Shape starten
    EditStartRequested { shape_id: u64 },
    /// Editiersitzung beenden (Mittellinie übernehmen)
    EditStopRequested,
    /// Shape per Nächster-Vertex-Suche zum Editieren anwählen
    PickShapeRequested { position: LatLng },
    /// Breite eines Shapes ändern
    SetWidthRequested { shape_id: u64, width: f64 },
    /// Shape aus dem Bestand entfernen
    RemoveShapeRequested { shape_id: u64 },
    /// Feature-Collection aus einer Datei laden
    LoadFileRequested { path: String },
    /// Bestand als Feature-Collection speichern
    SaveFileRequested { path: String },
}
