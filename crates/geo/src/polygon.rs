//! Event boundary polygons.

use geo::{Coord, Intersects, LineString, Polygon};

use crate::bbox::BoundingBox;
use crate::error::{GeometryError, Result};
use crate::position::Position;
use crate::ring::{SweepRing, SweepVertex};

/// One contiguous boundary shape of an event area.
///
/// Stored as a closed ring: the last vertex equals the first. Construction
/// accepts either an open or an explicitly closed vertex list.
#[derive(Clone, Debug)]
pub struct AreaPolygon {
    ring: Vec<Position>,
    shape: Polygon,
    bbox: BoundingBox,
}

impl AreaPolygon {
    /// Build a polygon from an ordered vertex list.
    ///
    /// The caller is responsible for supplying a simple (non-self-
    /// intersecting) ring. Fewer than 3 distinct vertices is a broken event
    /// definition and fails fast.
    pub fn from_positions(positions: Vec<Position>) -> Result<Self> {
        let mut ring = positions;
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(GeometryError::MalformedPolygon {
                vertices: ring.len(),
            });
        }
        ring.push(ring[0]);

        let shape = Polygon::new(
            LineString::new(
                ring.iter()
                    .map(|p| Coord {
                        x: p.longitude,
                        y: p.latitude,
                    })
                    .collect(),
            ),
            vec![],
        );

        let mut bbox = BoundingBox::point(ring[0]);
        for position in &ring {
            bbox = bbox.expanded_to(*position);
        }

        Ok(Self { ring, shape, bbox })
    }

    /// Minimal box containing all vertices (memoized at construction).
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Point-in-polygon test, inclusive: a point exactly on an edge or
    /// vertex is inside.
    pub fn contains(&self, position: Position) -> bool {
        self.shape.intersects(&position.to_point())
    }

    /// The closed vertex ring (last vertex equals the first).
    pub fn ring(&self) -> &[Position] {
        &self.ring
    }

    /// The ring without its closing vertex, as sweep-split input.
    pub fn sweep_ring(&self) -> SweepRing {
        SweepRing::new(
            self.ring[..self.ring.len() - 1]
                .iter()
                .map(|p| SweepVertex::Boundary(*p))
                .collect(),
        )
    }
}
