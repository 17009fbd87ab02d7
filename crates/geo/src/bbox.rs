//! Bounding boxes over geographic coordinates.

use crate::error::{GeometryError, Result};
use crate::position::{east_west_distance, Position};

/// Axis-aligned box in decimal degrees. Invariant: `south <= north` and
/// `west <= east` (boxes wrapping the antimeridian are rejected at
/// construction).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Construct from two diagonal corners.
    pub fn from_corners(southwest: Position, northeast: Position) -> Result<Self> {
        if northeast.latitude < southwest.latitude || northeast.longitude < southwest.longitude {
            return Err(GeometryError::InvertedBounds {
                southwest,
                northeast,
            });
        }
        Ok(Self {
            south: southwest.latitude,
            west: southwest.longitude,
            north: northeast.latitude,
            east: northeast.longitude,
        })
    }

    /// A degenerate box covering a single position.
    pub fn point(position: Position) -> Self {
        Self {
            south: position.latitude,
            west: position.longitude,
            north: position.latitude,
            east: position.longitude,
        }
    }

    /// The smallest box containing `self` and `position`.
    pub fn expanded_to(self, position: Position) -> Self {
        Self {
            south: self.south.min(position.latitude),
            west: self.west.min(position.longitude),
            north: self.north.max(position.latitude),
            east: self.east.max(position.longitude),
        }
    }

    /// The smallest box containing both boxes.
    pub fn merged(self, other: BoundingBox) -> Self {
        Self {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }

    /// The latitude at which the box's east-west ground distance is
    /// maximal: 0 if the box straddles (or is symmetric about) the equator,
    /// otherwise whichever edge lies closer to it.
    pub fn latitude_of_widest_part(&self) -> f64 {
        if self.south < 0.0 && self.north > 0.0 {
            return 0.0;
        }
        if self.south == -self.north {
            return 0.0;
        }
        if self.south.abs() < self.north.abs() {
            self.south
        } else {
            self.north
        }
    }

    /// East-west extent in meters at a given latitude row.
    pub fn width_at(&self, latitude: f64) -> f64 {
        east_west_distance(self.west, self.east, latitude)
    }

    /// Inclusive containment on all edges.
    pub fn contains(&self, position: Position) -> bool {
        position.latitude >= self.south
            && position.latitude <= self.north
            && position.longitude >= self.west
            && position.longitude <= self.east
    }
}
