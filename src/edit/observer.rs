//! Beobachter-Schnittstelle zwischen Editing-Kern und Renderer.
//!
//! Der Kern kennt keine Darstellung. Ein Renderer implementiert
//! [`ChainObserver`] und bekommt typisierte Benachrichtigungen, sobald
//! sich Geometrie oder Handle-Bestand einer Chain ändern.

use crate::core::geo::LatLng;
use crate::geometry::BoundaryGeometry;

/// Rolle eines Editier-Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Vollwertiger Stützpunkt der Mittellinie
    Vertex,
    /// Einfüge-Handle zwischen zwei benachbarten Stützpunkten
    Midpoint,
}

/// Darstellungs-Handle eines Chain-Nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeHandle {
    /// Stabile Node-ID innerhalb der Chain
    pub id: u64,
    /// Aktuelle Position
    pub position: LatLng,
    /// Vertex oder Midpoint
    pub role: NodeRole,
}

/// Typisierte Benachrichtigungen des Editing-Kerns.
///
/// Alle Methoden haben leere Default-Implementierungen; ein Renderer
/// überschreibt nur das, was er darstellt.
pub trait ChainObserver {
    /// Eine Editiergeste hat begonnen.
    fn on_edit_started(&mut self) {}

    /// Die Randgeometrie wurde neu berechnet.
    fn on_geometry_changed(&mut self, _geometry: &BoundaryGeometry) {}

    /// Der Handle-Bestand hat sich geändert (Positionen oder Anzahl).
    fn on_nodes_changed(&mut self, _nodes: &[NodeHandle]) {}

    /// Eine Mutation wurde abgeschlossen und in die Mittellinie übernommen.
    fn on_edit_committed(&mut self) {}
}

/// Beobachter ohne Verhalten, für Headless-Betrieb und Tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ChainObserver for NullObserver {}
