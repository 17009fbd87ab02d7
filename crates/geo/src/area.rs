//! Event areas: a bounding box plus boundary polygons.

use crate::bbox::BoundingBox;
use crate::error::{GeometryError, Result};
use crate::polygon::AreaPolygon;
use crate::position::Position;

/// The spatial extent of an event. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Area {
    bbox: BoundingBox,
    polygons: Vec<AreaPolygon>,
}

impl Area {
    /// Build from an explicit box and polygon set. An empty polygon set is
    /// legal: such an area can never produce a sweep split.
    pub fn new(bbox: BoundingBox, polygons: Vec<AreaPolygon>) -> Self {
        Self { bbox, polygons }
    }

    /// Build from polygons alone, deriving the box as the union of the
    /// polygon boxes.
    pub fn from_polygons(polygons: Vec<AreaPolygon>) -> Result<Self> {
        let mut boxes = polygons.iter().map(AreaPolygon::bbox);
        let first = boxes.next().ok_or(GeometryError::EmptyArea)?;
        let bbox = boxes.fold(first, BoundingBox::merged);
        Ok(Self { bbox, polygons })
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn polygons(&self) -> &[AreaPolygon] {
        &self.polygons
    }

    /// True if any boundary polygon contains the position (boundary
    /// inclusive).
    pub fn contains(&self, position: Position) -> bool {
        self.polygons
            .iter()
            .any(|polygon| polygon.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(points: &[(f64, f64)]) -> AreaPolygon {
        AreaPolygon::from_positions(
            points
                .iter()
                .map(|&(latitude, longitude)| Position::new(latitude, longitude))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_polygons_merges_boxes() {
        let area = Area::from_polygons(vec![
            polygon(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]),
            polygon(&[(5.0, 5.0), (5.0, 7.0), (7.0, 7.0), (7.0, 5.0)]),
        ])
        .unwrap();

        let bbox = area.bbox();
        assert_eq!((bbox.south, bbox.west, bbox.north, bbox.east), (0.0, 0.0, 7.0, 7.0));
    }

    #[test]
    fn test_from_polygons_rejects_empty() {
        assert!(matches!(
            Area::from_polygons(vec![]),
            Err(GeometryError::EmptyArea)
        ));
    }

    #[test]
    fn test_contains_any_polygon() {
        let area = Area::from_polygons(vec![
            polygon(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]),
            polygon(&[(5.0, 5.0), (5.0, 7.0), (7.0, 7.0), (7.0, 5.0)]),
        ])
        .unwrap();

        assert!(area.contains(Position::new(1.0, 1.0)));
        assert!(area.contains(Position::new(6.0, 6.0)));
        // Inside the merged bbox but in neither polygon
        assert!(!area.contains(Position::new(3.5, 3.5)));
    }

    #[test]
    fn test_empty_area_contains_nothing() {
        let bbox = BoundingBox::from_corners(Position::new(0.0, 0.0), Position::new(1.0, 1.0))
            .unwrap();
        let area = Area::new(bbox, vec![]);
        assert!(!area.contains(Position::new(0.5, 0.5)));
    }
}
