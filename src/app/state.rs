//! Editor State: Shape-Bestand, Sitzungsmodus und Optionen.

use super::CommandLog;
use crate::core::ShapeMap;
use crate::edit::{ChainObserver, DrawSession, NullObserver, VertexChain};
use crate::shared::EditorOptions;

/// Aktiver Sitzungsmodus des Editors.
///
/// Der Editor ist immer in genau einem Modus; Zeichnen und Editieren
/// schließen sich gegenseitig aus. Das Intent-Mapping löst Konflikte
/// auf, indem es die laufende Sitzung vor dem Moduswechsel beendet.
#[derive(Debug)]
pub enum SessionMode {
    /// Keine laufende Sitzung
    Idle,
    /// Eine neue Mittellinie wird Klick für Klick aufgebaut
    Drawing(DrawSession),
    /// Ein bestehendes Shape wird über seine Chain editiert
    Editing(EditSession),
}

/// Laufende Editiersitzung eines Shapes.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// ID des editierten Shapes
    pub shape_id: u64,
    /// Editierbare Vertex-Kette
    pub chain: VertexChain,
}

/// Hauptzustand des Editors.
pub struct EditorState {
    /// Shape-Bestand samt abgeleiteter Randgeometrie
    pub shapes: ShapeMap,
    /// Aktiver Sitzungsmodus
    pub session: SessionMode,
    /// Laufzeit-Optionen (Pick-Radius, Standardbreite, Darstellungswerte)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Empfänger der Chain-Benachrichtigungen (Renderer-Anbindung)
    pub renderer: Box<dyn ChainObserver>,
}

impl EditorState {
    /// Erstellt einen leeren Editor-Zustand ohne Renderer-Anbindung.
    pub fn new() -> Self {
        Self::with_renderer(Box::new(NullObserver))
    }

    /// Erstellt einen leeren Editor-Zustand mit Renderer-Anbindung.
    pub fn with_renderer(renderer: Box<dyn ChainObserver>) -> Self {
        Self {
            shapes: ShapeMap::new(),
            session: SessionMode::Idle,
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            renderer,
        }
    }

    /// Läuft gerade eine Zeichensitzung?
    pub fn is_drawing(&self) -> bool {
        matches!(self.session, SessionMode::Drawing(_))
    }

    /// Läuft gerade eine Editiersitzung?
    pub fn is_editing(&self) -> bool {
        matches!(self.session, SessionMode::Editing(_))
    }

    /// ID des gerade editierten Shapes, falls eine Sitzung läuft.
    pub fn editing_shape_id(&self) -> Option<u64> {
        match &self.session {
            SessionMode::Editing(session) => Some(session.shape_id),
            _ => None,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
