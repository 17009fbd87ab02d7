//! Sweep-split ring representation.
//!
//! When the wavefront cuts a boundary polygon, each output ring mixes the
//! polygon's own vertices with synthetic [`CutVertex`] seam points. Rings
//! are stored open; the closing edge from last back to first is implicit.

use crate::bbox::BoundingBox;
use crate::position::Position;

/// A synthetic vertex inserted where the wavefront crosses a polygon edge.
///
/// The same `cut_index` appears in exactly one swept-side ring and one
/// unswept-side ring, so the two halves produced by a cut can be rejoined
/// along their seam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutVertex {
    pub position: Position,
    pub cut_index: u32,
    /// Edge endpoint the cut interpolates from
    pub left: Position,
    /// Edge endpoint the cut interpolates to
    pub right: Position,
}

/// One vertex of a split result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepVertex {
    /// A vertex of the original boundary ring
    Boundary(Position),
    /// A seam vertex created by a front crossing
    Cut(CutVertex),
}

impl SweepVertex {
    pub fn position(&self) -> Position {
        match self {
            Self::Boundary(position) => *position,
            Self::Cut(cut) => cut.position,
        }
    }

    pub fn cut_index(&self) -> Option<u32> {
        match self {
            Self::Boundary(_) => None,
            Self::Cut(cut) => Some(cut.cut_index),
        }
    }
}

/// One ring of a traversed/remaining split.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRing {
    vertices: Vec<SweepVertex>,
}

impl SweepRing {
    pub fn new(vertices: Vec<SweepVertex>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[SweepVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.vertices.iter().map(|v| v.position())
    }

    /// Minimal box over the ring's vertices, or `None` for an empty ring.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold(BoundingBox::point(first), BoundingBox::expanded_to))
    }

    /// Shoelace area in square degrees, positive for counter-clockwise
    /// winding. The implicit closing edge is included.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.vertices[i].position();
            let b = self.vertices[(i + 1) % n].position();
            sum += a.longitude * b.latitude - b.longitude * a.latitude;
        }
        sum / 2.0
    }

    pub fn unsigned_area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Highest cut index present in the ring, if any.
    pub fn max_cut_index(&self) -> Option<u32> {
        self.vertices.iter().filter_map(|v| v.cut_index()).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn boundary(latitude: f64, longitude: f64) -> SweepVertex {
        SweepVertex::Boundary(Position::new(latitude, longitude))
    }

    #[test]
    fn test_shoelace_area_of_square() {
        // 10 x 5 degree box
        let ring = SweepRing::new(vec![
            boundary(10.0, 20.0),
            boundary(10.0, 30.0),
            boundary(15.0, 30.0),
            boundary(15.0, 20.0),
        ]);
        assert_relative_eq!(ring.unsigned_area(), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn test_signed_area_flips_with_winding() {
        let ccw = SweepRing::new(vec![
            boundary(0.0, 0.0),
            boundary(0.0, 1.0),
            boundary(1.0, 1.0),
        ]);
        let cw = SweepRing::new(vec![
            boundary(1.0, 1.0),
            boundary(0.0, 1.0),
            boundary(0.0, 0.0),
        ]);
        assert!(ccw.signed_area() > 0.0);
        assert_relative_eq!(ccw.signed_area(), -cw.signed_area(), max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_ring_has_no_area() {
        let ring = SweepRing::new(vec![boundary(0.0, 0.0), boundary(1.0, 1.0)]);
        assert_eq!(ring.signed_area(), 0.0);
    }

    #[test]
    fn test_max_cut_index() {
        let seam = |index| {
            SweepVertex::Cut(CutVertex {
                position: Position::new(0.0, 0.0),
                cut_index: index,
                left: Position::new(0.0, -1.0),
                right: Position::new(0.0, 1.0),
            })
        };
        let ring = SweepRing::new(vec![boundary(0.0, 0.0), seam(3), seam(7), boundary(1.0, 1.0)]);
        assert_eq!(ring.max_cut_index(), Some(7));

        let plain = SweepRing::new(vec![boundary(0.0, 0.0)]);
        assert_eq!(plain.max_cut_index(), None);
    }

    #[test]
    fn test_bbox() {
        let ring = SweepRing::new(vec![
            boundary(10.0, 20.0),
            boundary(15.0, 30.0),
            boundary(12.0, 25.0),
        ]);
        let bbox = ring.bbox().unwrap();
        assert_eq!(bbox.south, 10.0);
        assert_eq!(bbox.east, 30.0);

        assert!(SweepRing::new(vec![]).bbox().is_none());
    }
}
