//! Geographic coordinates and ground-distance calculations.
//!
//! Uses the Haversine formula for arbitrary point pairs and the
//! cosine-of-latitude correction for east-west spans, since a degree of
//! longitude shrinks towards the poles.

use geo::{HaversineDistance, Point};

/// Metres spanned by one degree of latitude (and one degree of longitude at
/// the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude)
    pub fn to_point(self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// East-west ground distance in meters between two longitudes at a given
/// latitude row.
pub fn east_west_distance(longitude_a: f64, longitude_b: f64, latitude: f64) -> f64 {
    (longitude_b - longitude_a).abs() * METERS_PER_DEGREE * latitude.to_radians().cos()
}

/// Great-circle distance in meters between two positions
pub fn haversine_distance(a: Position, b: Position) -> f64 {
    a.to_point().haversine_distance(&b.to_point())
}
