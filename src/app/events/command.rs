use crate::core::{LatLng, ShapeKind};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditCommand {
    /// Zeichensitzung für eine Shape-Familie starten
    StartDraw { kind: ShapeKind },
    /// Stützpunkt an die entstehende Mittellinie anhängen
    AppendDrawPoint { position: LatLng },
    /// Transienten Vorschaupunkt der Zeichensitzung setzen
    UpdateDrawPreview { position: LatLng },
    /// Zeichensitzung abschließen (None = Standardbreite aus den Optionen)
    FinishDraw { width: Option<f64> },
    /// Zeichensitzung ersatzlos verwerfen
    CancelDraw,
    /// Editier-Chain an ein bestehendes Shape anheften
    AttachChain { shape_id: u64 },
    /// Editiersitzung beenden und die Mittellinie ins Shape übernehmen
    DetachChain,
    /// Beginn einer Drag-Geste auf einem Handle melden
    BeginVertexMove { node_id: u64 },
    /// Transiente Positionsvorschau während eines Drags
    PreviewVertexMove { node_id: u64, position: LatLng },
    /// Vertex-Verschiebung committen
    CommitVertexMove { node_id: u64, position: LatLng },
    /// Vertex samt angrenzender Midpoints löschen
    DeleteVertex { node_id: u64 },
    /// Midpoint an einer Zielposition zum Vertex befördern
    PromoteMidpoint { node_id: u64, position: LatLng },
    /// Breite eines Shapes setzen (mit Bereinigung)
    SetShapeWidth { shape_id: u64, width: f64 },
    /// Shape aus dem Bestand entfernen
    RemoveShape { shape_id: u64 },
    /// Nächstgelegenes Shape innerhalb des Radius zum Editieren öffnen
    PickShape { position: LatLng, max_distance_m: f64 },
    /// Feature-Collection aus einer Datei laden
    LoadFile { path: String },
    /// Bestand als Feature-Collection speichern
    SaveFile { path: String },
}
