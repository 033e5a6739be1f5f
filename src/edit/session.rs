//! Zeichensitzung: Klick für Klick eine neue Mittellinie aufbauen.

use crate::core::geo::LatLng;
use crate::core::shape::ShapeKind;

/// Laufende Zeichensitzung für ein neues Shape.
///
/// Jeder Klick hängt einen Stützpunkt an; der Vorschaupunkt unter dem
/// Cursor gehört nicht zur Mittellinie und fällt beim Abschluss weg.
/// Die Breite kommt erst beim Abschluss dazu.
#[derive(Debug, Clone)]
pub struct DrawSession {
    kind: ShapeKind,
    points: Vec<LatLng>,
    preview: Option<LatLng>,
}

impl DrawSession {
    /// Startet eine leere Zeichensitzung.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            preview: None,
        }
    }

    /// Familie des entstehenden Shapes.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Hängt einen Stützpunkt an die Mittellinie an.
    pub fn add_point(&mut self, position: LatLng) {
        self.points.push(position);
        log::debug!(
            "Zeichensitzung: Punkt {} bei ({:.6}, {:.6})",
            self.points.len(),
            position.lat,
            position.lng
        );
    }

    /// Aktualisiert den transienten Vorschaupunkt unter dem Cursor.
    pub fn update_preview(&mut self, position: LatLng) {
        self.preview = Some(position);
    }

    /// Bisher gesetzte Stützpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Linie für die Darstellung: Mittellinie plus Vorschaupunkt.
    pub fn preview_line(&self) -> Vec<LatLng> {
        let mut line = self.points.clone();
        if let Some(preview) = self.preview {
            line.push(preview);
        }
        line
    }

    /// Liefert die Mittellinie, falls genügend Punkte vorliegen.
    ///
    /// Unter 2 Punkten entsteht kein Shape; der Aufrufer entscheidet, ob
    /// die Sitzung verworfen oder fortgesetzt wird.
    pub fn finished_points(&self) -> Option<Vec<LatLng>> {
        if self.points.len() < 2 {
            log::debug!(
                "Zeichensitzung nicht abschließbar: nur {} Punkt(e)",
                self.points.len()
            );
            return None;
        }
        Some(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_points_and_finish() {
        let mut session = DrawSession::new(ShapeKind::Corridor);
        session.add_point(LatLng::new(0.0, 0.0));
        session.add_point(LatLng::new(0.001, 0.0));
        session.add_point(LatLng::new(0.002, 0.0));

        let points = session.finished_points().expect("drei Punkte reichen");
        assert_eq!(points.len(), 3);
        assert_eq!(session.kind(), ShapeKind::Corridor);
    }

    #[test]
    fn finish_refuses_below_two_points() {
        let mut session = DrawSession::new(ShapeKind::Arrow);
        assert!(session.finished_points().is_none());

        session.add_point(LatLng::new(0.0, 0.0));
        assert!(session.finished_points().is_none());
    }

    #[test]
    fn preview_is_not_part_of_the_centerline() {
        let mut session = DrawSession::new(ShapeKind::Arrow);
        session.add_point(LatLng::new(0.0, 0.0));
        session.add_point(LatLng::new(0.001, 0.0));
        session.update_preview(LatLng::new(0.002, 0.0));

        assert_eq!(session.preview_line().len(), 3);
        assert_eq!(session.finished_points().map(|p| p.len()), Some(2));
        assert_eq!(session.point_count(), 2);
    }
}
