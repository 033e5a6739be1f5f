//! Editierbare Vertex-Kette eines Shapes.
//!
//! Eine [`VertexChain`] hält während einer Editiersitzung Stützpunkte
//! (Vertices) und Einfüge-Handles (Midpoints) in einer Arena mit stabilen
//! IDs. Nachbarschaften liegen als ID-Seitentabelle neben den Nodes; die
//! Ordinalreihenfolge der Vertices bestimmt allein `order` und wird nach
//! jeder strukturellen Mutation neu durchnummeriert.
//!
//! Strukturelle Mutationen (Löschen, Befördern) laufen atomar: erst der
//! komplette Umbau, dann die Benachrichtigungen an den Beobachter. Ein
//! Reentranz-Schutz verweigert verschachtelte Strukturmutationen.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::core::geo::LatLng;
use crate::core::projection::projected_midpoint;
use crate::core::shape::{sanitize_width, Shape, ShapeKind};
use crate::geometry::{build_offset, BoundaryGeometry, GeometryError};

use super::observer::{ChainObserver, NodeHandle, NodeRole};

/// Kapazitätsprofil einer Chain: Löschgrenze und Geschlossenheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainProfile {
    /// Minimale Vertex-Anzahl; Löschungen darunter werden verweigert
    pub min_vertex_count: usize,
    /// Geschlossene Form: Wrap-Midpoint und zyklische Nachbarschaft
    pub is_closed: bool,
}

impl ChainProfile {
    /// Profil der Shape-Familien: Pfeile und Korridore editieren als
    /// geschlossene Form mit Wrap-Midpoint und Minimum 4.
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Arrow | ShapeKind::Corridor => Self {
                min_vertex_count: 4,
                is_closed: true,
            },
        }
    }

    /// Offene Polyline: Minimum 3, kein Wrap-Midpoint.
    pub fn open_polyline() -> Self {
        Self {
            min_vertex_count: 3,
            is_closed: false,
        }
    }

    /// Nackte Mittellinie: Minimum 2.
    pub fn centerline() -> Self {
        Self {
            min_vertex_count: 2,
            is_closed: false,
        }
    }
}

/// Vollwertiger Stützpunkt der Mittellinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexNode {
    /// Stabile ID (Arena-Schlüssel)
    pub id: u64,
    /// Ordinalposition in der Kette
    pub index: usize,
    /// Geographische Position
    pub position: LatLng,
}

/// Einfüge-Handle zwischen zwei benachbarten Vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointNode {
    /// Stabile ID (Arena-Schlüssel)
    pub id: u64,
    /// Position auf dem projizierten Segmentmittelpunkt
    pub position: LatLng,
    /// Vertex auf der linken Seite (kleinerer Ordinalindex, beim
    /// Wrap-Midpoint der letzte Vertex)
    pub left: u64,
    /// Vertex auf der rechten Seite
    pub right: u64,
}

/// Nachbarschafts-Seitentabelle eines Vertex. IDs statt Referenzen, damit
/// die Arena frei umgebaut werden kann.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct NeighborLinks {
    prev: Option<u64>,
    next: Option<u64>,
    mid_left: Option<u64>,
    mid_right: Option<u64>,
}

/// Editierbare Kette aus Vertices und Midpoints mit stabilen IDs.
#[derive(Debug, Clone)]
pub struct VertexChain {
    profile: ChainProfile,
    kind: ShapeKind,
    width: f64,
    vertices: IndexMap<u64, VertexNode>,
    midpoints: IndexMap<u64, MidpointNode>,
    links: HashMap<u64, NeighborLinks>,
    /// Reihenfolge-Autorität: Vertex-IDs in Kettenreihenfolge
    order: Vec<u64>,
    next_id: u64,
    in_mutation: bool,
}

impl VertexChain {
    /// Heftet eine Chain an eine Mittellinie.
    ///
    /// Legt pro Stützpunkt einen Vertex an, verdrahtet die Nachbarschaft
    /// (bei geschlossenen Profilen zyklisch) und erzeugt zwischen jedem
    /// Nachbarpaar einen Midpoint. Der Beobachter erhält den initialen
    /// Handle-Bestand und die erste Randgeometrie.
    pub fn attach(
        points: &[LatLng],
        kind: ShapeKind,
        width: f64,
        profile: ChainProfile,
        observer: &mut dyn ChainObserver,
    ) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidGeometry(points.len()));
        }
        let (width, _) = sanitize_width(width, kind);

        let mut chain = Self {
            profile,
            kind,
            width,
            vertices: IndexMap::new(),
            midpoints: IndexMap::new(),
            links: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            in_mutation: false,
        };

        for (index, &position) in points.iter().enumerate() {
            let id = chain.alloc_id();
            chain.vertices.insert(
                id,
                VertexNode {
                    id,
                    index,
                    position,
                },
            );
            chain.links.insert(id, NeighborLinks::default());
            chain.order.push(id);
        }
        for i in 1..chain.order.len() {
            let (a, b) = (chain.order[i - 1], chain.order[i]);
            chain.link_pair(a, b);
        }
        if profile.is_closed {
            let (a, b) = (chain.order[chain.order.len() - 1], chain.order[0]);
            chain.link_pair(a, b);
        }
        chain.rebuild_midpoints();

        log::debug!(
            "Chain angeheftet: {} Vertices, {} Midpoints ({:?})",
            chain.vertex_count(),
            chain.midpoint_count(),
            kind
        );
        chain.notify_nodes(observer);
        chain.recompute(observer);
        Ok(chain)
    }

    /// Heftet eine Chain an ein bestehendes Shape (Profil seiner Familie).
    pub fn attach_for_shape(
        shape: &Shape,
        observer: &mut dyn ChainObserver,
    ) -> Result<Self, GeometryError> {
        Self::attach(
            &shape.points,
            shape.kind,
            shape.width,
            ChainProfile::for_kind(shape.kind),
            observer,
        )
    }

    /// Beendet die Editiersitzung und liefert die finale Mittellinie.
    pub fn detach(self) -> Vec<LatLng> {
        self.points()
    }

    // === Editiergesten ===

    /// Meldet den Beginn einer Editiergeste für einen bekannten Node.
    pub fn begin_move(&self, id: u64, observer: &mut dyn ChainObserver) -> bool {
        if !self.vertices.contains_key(&id) && !self.midpoints.contains_key(&id) {
            log::debug!("Gestenbeginn verweigert: Node {} unbekannt", id);
            return false;
        }
        observer.on_edit_started();
        true
    }

    /// Transiente Positionsvorschau während eines Drags.
    ///
    /// Aktualisiert nur die Vertex-Position und die Randgeometrie; die
    /// Midpoints bleiben liegen, bis die Geste committet.
    pub fn preview_move(
        &mut self,
        id: u64,
        position: LatLng,
        observer: &mut dyn ChainObserver,
    ) -> bool {
        if !self.apply_position(id, position) {
            return false;
        }
        self.recompute(observer);
        true
    }

    /// Committet eine Vertex-Verschiebung.
    ///
    /// Positioniert die angrenzenden Midpoints auf die projizierten
    /// Segmentmittelpunkte und meldet Geometrie, Handles und den Abschluss
    /// der Mutation.
    pub fn move_vertex(
        &mut self,
        id: u64,
        position: LatLng,
        observer: &mut dyn ChainObserver,
    ) -> bool {
        if !self.apply_position(id, position) {
            return false;
        }
        self.refresh_adjacent_midpoints(id);
        self.notify_nodes(observer);
        self.recompute(observer);
        observer.on_edit_committed();
        true
    }

    /// Löscht einen Vertex samt seiner Midpoints.
    ///
    /// Verweigert am Profilminimum, damit das Shape editierbar bleibt.
    /// Die beiden Nachbarn werden direkt verbunden und erhalten einen
    /// frischen Midpoint; an offenen Enden entsteht keiner.
    pub fn delete_vertex(&mut self, id: u64, observer: &mut dyn ChainObserver) -> bool {
        if self.in_mutation {
            log::warn!("Löschung von Vertex {} verweigert: Mutation läuft bereits", id);
            return false;
        }
        let Some(vertex) = self.vertices.get(&id) else {
            log::debug!("Löschung verweigert: Vertex {} unbekannt", id);
            return false;
        };
        if self.vertex_count() <= self.profile.min_vertex_count {
            log::debug!(
                "Löschung von Vertex {} verweigert: Minimum von {} Vertices erreicht",
                id,
                self.profile.min_vertex_count
            );
            return false;
        }
        let index = vertex.index;
        self.in_mutation = true;

        let links = self.links.get(&id).copied().unwrap_or_default();
        if let Some(mid) = links.mid_left {
            self.remove_midpoint(mid);
        }
        if let Some(mid) = links.mid_right {
            self.remove_midpoint(mid);
        }

        self.vertices.shift_remove(&id);
        self.links.remove(&id);
        self.order.remove(index);
        self.renumber();

        match (links.prev, links.next) {
            (Some(prev), Some(next)) => {
                self.link_pair(prev, next);
                self.create_midpoint_between(prev, next);
            }
            (None, Some(next)) => {
                if let Some(l) = self.links.get_mut(&next) {
                    l.prev = None;
                }
            }
            (Some(prev), None) => {
                if let Some(l) = self.links.get_mut(&prev) {
                    l.next = None;
                }
            }
            (None, None) => {}
        }

        log::info!(
            "Vertex {} entfernt, {} Stützpunkte verbleiben",
            id,
            self.vertex_count()
        );
        self.notify_nodes(observer);
        self.recompute(observer);
        observer.on_edit_committed();
        self.in_mutation = false;
        true
    }

    /// Befördert einen Midpoint zum vollwertigen Vertex an `position`.
    ///
    /// Der neue Vertex übernimmt den Ordinalindex seines rechten
    /// Nachbarn; am Wrap-Midpoint einer geschlossenen Form ist das der
    /// Index 0. Beidseitig entstehen frische Midpoints.
    pub fn promote_midpoint(
        &mut self,
        id: u64,
        position: LatLng,
        observer: &mut dyn ChainObserver,
    ) -> Option<u64> {
        if self.in_mutation {
            log::warn!("Promotion von Midpoint {} verweigert: Mutation läuft bereits", id);
            return None;
        }
        let Some(mid) = self.midpoints.get(&id).copied() else {
            log::debug!("Promotion verweigert: Midpoint {} unbekannt", id);
            return None;
        };
        let Some(right_vertex) = self.vertices.get(&mid.right) else {
            log::warn!("Promotion verweigert: rechter Nachbar {} fehlt", mid.right);
            return None;
        };
        let new_index = right_vertex.index;
        self.in_mutation = true;

        self.remove_midpoint(id);

        let new_id = self.alloc_id();
        self.order.insert(new_index, new_id);
        self.vertices.insert(
            new_id,
            VertexNode {
                id: new_id,
                index: new_index,
                position,
            },
        );
        self.links.insert(new_id, NeighborLinks::default());
        self.renumber();

        self.link_pair(mid.left, new_id);
        self.link_pair(new_id, mid.right);
        self.create_midpoint_between(mid.left, new_id);
        self.create_midpoint_between(new_id, mid.right);

        log::info!(
            "Midpoint {} zu Vertex {} befördert (Index {})",
            id,
            new_id,
            new_index
        );
        self.notify_nodes(observer);
        self.recompute(observer);
        observer.on_edit_committed();
        self.in_mutation = false;
        Some(new_id)
    }

    /// Setzt die Breite neu (mit Bereinigung) und berechnet die Geometrie
    /// neu. Liefert die tatsächlich wirksame Breite.
    pub fn set_width(&mut self, width: f64, observer: &mut dyn ChainObserver) -> f64 {
        let (width, _) = sanitize_width(width, self.kind);
        self.width = width;
        self.recompute(observer);
        width
    }

    // === Abfragen ===

    /// Shape-Familie der Chain.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Aktuelle (bereinigte) Breite in Metern.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Aktives Kapazitätsprofil.
    pub fn profile(&self) -> ChainProfile {
        self.profile
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Midpoints.
    pub fn midpoint_count(&self) -> usize {
        self.midpoints.len()
    }

    /// Mittellinie in Kettenreihenfolge.
    pub fn points(&self) -> Vec<LatLng> {
        self.order
            .iter()
            .filter_map(|id| self.vertices.get(id))
            .map(|v| v.position)
            .collect()
    }

    /// Vertex nach ID.
    pub fn vertex(&self, id: u64) -> Option<&VertexNode> {
        self.vertices.get(&id)
    }

    /// Midpoint nach ID.
    pub fn midpoint(&self, id: u64) -> Option<&MidpointNode> {
        self.midpoints.get(&id)
    }

    /// Vertex-ID an einer Ordinalposition.
    pub fn vertex_id_at(&self, index: usize) -> Option<u64> {
        self.order.get(index).copied()
    }

    /// Ist die ID ein Vertex dieser Chain?
    pub fn is_vertex(&self, id: u64) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Ist die ID ein Midpoint dieser Chain?
    pub fn is_midpoint(&self, id: u64) -> bool {
        self.midpoints.contains_key(&id)
    }

    /// Vorgänger- und Nachfolger-ID eines Vertex.
    pub fn neighbor_ids(&self, id: u64) -> Option<(Option<u64>, Option<u64>)> {
        self.links.get(&id).map(|l| (l.prev, l.next))
    }

    /// Alle Editier-Handles: erst die Vertices in Kettenreihenfolge, dann
    /// die Midpoints entlang derselben Reihenfolge.
    pub fn node_handles(&self) -> Vec<NodeHandle> {
        let mut handles = Vec::with_capacity(self.vertices.len() + self.midpoints.len());
        for id in &self.order {
            if let Some(v) = self.vertices.get(id) {
                handles.push(NodeHandle {
                    id: v.id,
                    position: v.position,
                    role: NodeRole::Vertex,
                });
            }
        }
        for id in &self.order {
            let Some(links) = self.links.get(id) else {
                continue;
            };
            let Some(mid_id) = links.mid_right else {
                continue;
            };
            if let Some(m) = self.midpoints.get(&mid_id) {
                handles.push(NodeHandle {
                    id: m.id,
                    position: m.position,
                    role: NodeRole::Midpoint,
                });
            }
        }
        handles
    }

    /// Aktuelle Randgeometrie der Chain.
    pub fn geometry(&self) -> Result<BoundaryGeometry, GeometryError> {
        build_offset(&self.points(), self.width, self.kind)
    }

    // === Interna ===

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn link_pair(&mut self, a: u64, b: u64) {
        if let Some(links) = self.links.get_mut(&a) {
            links.next = Some(b);
        }
        if let Some(links) = self.links.get_mut(&b) {
            links.prev = Some(a);
        }
    }

    /// Nummeriert die Ordinalindizes anhand der Reihenfolge neu.
    fn renumber(&mut self) {
        for (index, id) in self.order.iter().enumerate() {
            if let Some(vertex) = self.vertices.get_mut(id) {
                vertex.index = index;
            }
        }
    }

    fn apply_position(&mut self, id: u64, position: LatLng) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.position = position;
                true
            }
            None => {
                log::debug!("Positionsupdate verweigert: Vertex {} unbekannt", id);
                false
            }
        }
    }

    /// Legt einen Midpoint zwischen zwei Vertices an und verdrahtet ihn.
    fn create_midpoint_between(&mut self, left: u64, right: u64) {
        let (Some(a), Some(b)) = (self.vertices.get(&left), self.vertices.get(&right)) else {
            log::warn!(
                "Midpoint zwischen unbekannten Vertices {} und {} verworfen",
                left,
                right
            );
            return;
        };
        let position = projected_midpoint(a.position, b.position);
        let id = self.alloc_id();
        self.midpoints.insert(
            id,
            MidpointNode {
                id,
                position,
                left,
                right,
            },
        );
        if let Some(links) = self.links.get_mut(&left) {
            links.mid_right = Some(id);
        }
        if let Some(links) = self.links.get_mut(&right) {
            links.mid_left = Some(id);
        }
    }

    /// Entfernt einen Midpoint und löst seine Verdrahtung.
    fn remove_midpoint(&mut self, id: u64) {
        let Some(mid) = self.midpoints.shift_remove(&id) else {
            return;
        };
        if let Some(links) = self.links.get_mut(&mid.left) {
            if links.mid_right == Some(id) {
                links.mid_right = None;
            }
        }
        if let Some(links) = self.links.get_mut(&mid.right) {
            if links.mid_left == Some(id) {
                links.mid_left = None;
            }
        }
    }

    /// Baut alle Midpoints anhand der aktuellen Reihenfolge neu auf.
    fn rebuild_midpoints(&mut self) {
        self.midpoints.clear();
        for links in self.links.values_mut() {
            links.mid_left = None;
            links.mid_right = None;
        }
        for i in 1..self.order.len() {
            let (a, b) = (self.order[i - 1], self.order[i]);
            self.create_midpoint_between(a, b);
        }
        if self.profile.is_closed && self.order.len() >= 2 {
            let (a, b) = (self.order[self.order.len() - 1], self.order[0]);
            self.create_midpoint_between(a, b);
        }
    }

    /// Positioniert die an einen Vertex grenzenden Midpoints neu.
    fn refresh_adjacent_midpoints(&mut self, id: u64) {
        let links = self.links.get(&id).copied().unwrap_or_default();
        for mid_id in [links.mid_left, links.mid_right].into_iter().flatten() {
            let Some(mid) = self.midpoints.get(&mid_id).copied() else {
                continue;
            };
            let (Some(a), Some(b)) = (self.vertices.get(&mid.left), self.vertices.get(&mid.right))
            else {
                continue;
            };
            let position = projected_midpoint(a.position, b.position);
            if let Some(entry) = self.midpoints.get_mut(&mid_id) {
                entry.position = position;
            }
        }
    }

    fn notify_nodes(&self, observer: &mut dyn ChainObserver) {
        let handles = self.node_handles();
        observer.on_nodes_changed(&handles);
    }

    fn recompute(&self, observer: &mut dyn ChainObserver) {
        match self.geometry() {
            Ok(geometry) => observer.on_geometry_changed(&geometry),
            Err(e) => log::warn!("Neuberechnung der Randgeometrie fehlgeschlagen: {}", e),
        }
    }
}
