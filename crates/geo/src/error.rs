//! Geometry construction errors.
//!
//! All of these indicate a broken event definition, not a runtime
//! condition: callers are expected to fail the event's setup rather than
//! recover.

use crate::position::Position;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 distinct vertices, got {vertices}")]
    MalformedPolygon { vertices: usize },

    #[error("bounding box corners are inverted: south-west {southwest:?}, north-east {northeast:?}")]
    InvertedBounds {
        southwest: Position,
        northeast: Position,
    },

    #[error("area has no polygons to derive a bounding box from")]
    EmptyArea,
}

pub type Result<T> = std::result::Result<T, GeometryError>;
