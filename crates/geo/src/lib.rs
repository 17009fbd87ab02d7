//! # worldwidewaves-geo
//!
//! Geometry model for geographically-synchronized wave events.
//!
//! An event's spatial extent is an [`Area`]: a bounding box plus one or more
//! boundary polygons. The wave engine asks this crate two kinds of question:
//!
//! - **Containment and distance**: is a participant inside the event area,
//!   and how far apart are two coordinates on the ground?
//! - **Sweep splitting**: given a predicate describing which points the
//!   advancing wavefront has already passed, cut each boundary polygon into
//!   an already-swept ring and a not-yet-swept ring, with matching seam
//!   vertices so the two halves can be rejoined.
//!
//! ## Example
//!
//! ```
//! use worldwidewaves_geo::prelude::*;
//!
//! let ring = vec![
//!     Position::new(10.0, 20.0),
//!     Position::new(10.0, 30.0),
//!     Position::new(15.0, 30.0),
//!     Position::new(15.0, 20.0),
//! ];
//! let polygon = AreaPolygon::from_positions(ring).unwrap();
//! let area = Area::from_polygons(vec![polygon]).unwrap();
//!
//! assert!(area.contains(Position::new(12.0, 25.0)));
//! assert!(!area.contains(Position::new(12.0, 45.0)));
//! ```

pub mod area;
pub mod bbox;
pub mod error;
pub mod polygon;
pub mod position;
pub mod ring;
pub mod split;

// Re-exports for convenience
pub mod prelude {
    pub use crate::area::Area;
    pub use crate::bbox::BoundingBox;
    pub use crate::error::{GeometryError, Result};
    pub use crate::polygon::AreaPolygon;
    pub use crate::position::{east_west_distance, haversine_distance, Position, METERS_PER_DEGREE};
    pub use crate::ring::{CutVertex, SweepRing, SweepVertex};
    pub use crate::split::split_ring;
}

pub use prelude::*;
