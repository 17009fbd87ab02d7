//! The wavefront model.
//!
//! Given an event's area, its start time, and a front shape, this module
//! answers: where is the front right now, has it reached a given
//! participant, and how does it partition the area's polygons into swept
//! and not-yet-swept rings.
//!
//! The front is modeled as a straight line (or circle) sweeping the event's
//! bounding box, not a geodesically curved wavefront. Front positions are
//! evaluated at a caller-supplied latitude row, so each participant sees
//! the front at the row relevant to them.

pub mod snapshot;

use std::sync::Arc;
use std::time::Duration;

use worldwidewaves_geo::{
    east_west_distance, haversine_distance, split_ring, BoundingBox, Position, SweepRing,
};

use crate::clock::Clock;
use crate::error::{EngineError, Result};
use crate::event::Event;
use crate::position::PositionSource;
use self::snapshot::{UpdateMode, WavePolygons};

/// Compass direction a linear front travels in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
}

/// Geometry of the advancing front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveShape {
    /// A straight north-south line sweeping east or west across the area.
    Linear { speed_mps: f64, direction: Direction },
    /// A ring expanding from an epicenter.
    Circular {
        speed_mps: f64,
        epicenter: Position,
    },
}

impl WaveShape {
    pub fn speed_mps(&self) -> f64 {
        match self {
            Self::Linear { speed_mps, .. } | Self::Circular { speed_mps, .. } => *speed_mps,
        }
    }

    /// Is `point` behind the front `elapsed` after the start? Inclusive: a
    /// point exactly on the front counts as swept.
    fn front_has_passed(&self, bbox: &BoundingBox, elapsed: Duration, point: &Position) -> bool {
        match self {
            Self::Linear {
                speed_mps,
                direction,
            } => {
                let front =
                    linear_front_longitude(bbox, *speed_mps, *direction, elapsed, point.latitude);
                match direction {
                    Direction::East => point.longitude <= front,
                    Direction::West => point.longitude >= front,
                }
            }
            Self::Circular {
                speed_mps,
                epicenter,
            } => haversine_distance(*epicenter, *point) <= speed_mps * elapsed.as_secs_f64(),
        }
    }

    /// Ground distance in meters from the current front to `point`,
    /// unsigned.
    fn distance_to_front(&self, bbox: &BoundingBox, elapsed: Duration, point: &Position) -> f64 {
        match self {
            Self::Linear {
                speed_mps,
                direction,
            } => {
                let front =
                    linear_front_longitude(bbox, *speed_mps, *direction, elapsed, point.latitude);
                east_west_distance(front, point.longitude, point.latitude)
            }
            Self::Circular {
                speed_mps,
                epicenter,
            } => {
                let radius = speed_mps * elapsed.as_secs_f64();
                (haversine_distance(*epicenter, *point) - radius).abs()
            }
        }
    }
}

/// Current longitude of a straight front sweeping the box, evaluated at a
/// latitude row. Rests at the starting edge until the wave begins and runs
/// past the far edge once the crossing is complete; the fraction is
/// deliberately not clamped.
fn linear_front_longitude(
    bbox: &BoundingBox,
    speed_mps: f64,
    direction: Direction,
    elapsed: Duration,
    reference_latitude: f64,
) -> f64 {
    let max_distance = east_west_distance(bbox.west, bbox.east, reference_latitude);
    if max_distance <= 0.0 {
        // Zero east-west extent: instantaneous coverage
        return match direction {
            Direction::East => bbox.east,
            Direction::West => bbox.west,
        };
    }

    let traveled = speed_mps * elapsed.as_secs_f64();
    let fraction = traveled / max_distance;
    match direction {
        Direction::East => bbox.west + fraction * (bbox.east - bbox.west),
        Direction::West => bbox.east - fraction * (bbox.east - bbox.west),
    }
}

/// Where the expanding ring cuts the edge `a -> b`, found by bisecting the
/// edge against the radius.
fn circular_crossing(epicenter: Position, radius: f64, a: Position, b: Position) -> Position {
    let at = |t: f64| {
        Position::new(
            a.latitude + t * (b.latitude - a.latitude),
            a.longitude + t * (b.longitude - a.longitude),
        )
    };
    let a_inside = haversine_distance(epicenter, a) <= radius;
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if (haversine_distance(epicenter, at(mid)) <= radius) == a_inside {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    at(0.5 * (lo + hi))
}

/// A wave attached to its event.
///
/// All collaborators are injected at construction; there is no late
/// binding and no post-construction mutation.
pub struct Wave {
    event: Arc<dyn Event>,
    clock: Arc<dyn Clock>,
    position: Arc<dyn PositionSource>,
    shape: WaveShape,
}

impl Wave {
    /// Fails fast on a non-positive or non-finite speed: that is a broken
    /// event definition, not a runtime condition.
    pub fn new(
        event: Arc<dyn Event>,
        clock: Arc<dyn Clock>,
        position: Arc<dyn PositionSource>,
        shape: WaveShape,
    ) -> Result<Self> {
        let speed_mps = shape.speed_mps();
        if !speed_mps.is_finite() || speed_mps <= 0.0 {
            return Err(EngineError::InvalidSpeed { speed_mps });
        }
        Ok(Self {
            event,
            clock,
            position,
            shape,
        })
    }

    pub fn event(&self) -> &Arc<dyn Event> {
        &self.event
    }

    pub(crate) fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Time since the wave started, clamped at zero before the start.
    fn elapsed(&self) -> Duration {
        (self.clock.now() - self.event.wave_start())
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Total time for the front to cross the area, measured at the
    /// latitude row where the bounding box is widest. A zero-extent box
    /// means instantaneous coverage.
    pub fn wave_duration(&self) -> Duration {
        let bbox = self.event.area().bbox();
        let distance = match &self.shape {
            WaveShape::Linear { .. } => bbox.width_at(bbox.latitude_of_widest_part()),
            WaveShape::Circular { epicenter, .. } => {
                let corners = [
                    Position::new(bbox.south, bbox.west),
                    Position::new(bbox.south, bbox.east),
                    Position::new(bbox.north, bbox.west),
                    Position::new(bbox.north, bbox.east),
                ];
                corners
                    .iter()
                    .map(|corner| haversine_distance(*epicenter, *corner))
                    .fold(0.0, f64::max)
            }
        };
        if distance <= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(distance / self.shape.speed_mps())
        }
    }

    /// Fraction of the crossing completed, unclamped: values above 1 mean
    /// the wave has finished.
    pub fn progression(&self) -> f64 {
        let duration = self.wave_duration();
        if duration.is_zero() {
            return 1.0;
        }
        self.elapsed().as_secs_f64() / duration.as_secs_f64()
    }

    /// Current front longitude at a latitude row, for linear shapes.
    ///
    /// Callers typically pass the user's own latitude so the front is
    /// evaluated at the row relevant to that user. The result is not
    /// clamped to the box: once the crossing is complete it lies past the
    /// far edge.
    pub fn closest_front_longitude(&self, reference_latitude: f64) -> Option<f64> {
        match self.shape {
            WaveShape::Linear {
                speed_mps,
                direction,
            } => Some(linear_front_longitude(
                &self.event.area().bbox(),
                speed_mps,
                direction,
                self.elapsed(),
                reference_latitude,
            )),
            WaveShape::Circular { .. } => None,
        }
    }

    /// Hit test against the live position feed. False without a fix.
    pub fn has_user_been_hit_in_current_position(&self) -> bool {
        match self.position.current_position() {
            Some(user) => self.is_position_hit(&user),
            None => false,
        }
    }

    /// A position is hit once the front has passed it AND it lies within
    /// the event area: a user outside the boundary polygons is never hit,
    /// even if geometrically crossed.
    pub fn is_position_hit(&self, user: &Position) -> bool {
        let area = self.event.area();
        area.contains(*user) && self.shape.front_has_passed(&area.bbox(), self.elapsed(), user)
    }

    /// Predicted travel time from the current front to the user. `None`
    /// without a fix.
    ///
    /// The value is the unsigned front-to-user time and keeps being
    /// returned after the user has been hit (it then measures the front
    /// receding); `has_user_been_hit_in_current_position` is the source of
    /// truth for hit status.
    pub fn time_before_hit(&self) -> Option<Duration> {
        let user = self.position.current_position()?;
        let distance =
            self.shape
                .distance_to_front(&self.event.area().bbox(), self.elapsed(), &user);
        Some(Duration::from_secs_f64(distance / self.shape.speed_mps()))
    }

    /// Split the area into swept and not-yet-swept rings.
    ///
    /// Returns `None` when the area has no polygons, or when the wave has
    /// not started and there is no prior state to build on. In `Add` mode
    /// the previous snapshot's traversed rings are kept and only its
    /// remaining rings are re-split; `Recompose` rebuilds both sets from
    /// the original area.
    pub fn wave_polygons(
        &self,
        last: Option<&WavePolygons>,
        mode: UpdateMode,
    ) -> Option<WavePolygons> {
        let area = self.event.area();
        if area.polygons().is_empty() {
            return None;
        }
        let elapsed = self.elapsed();
        if elapsed.is_zero() && last.is_none() {
            return None;
        }

        let snapshot = match (mode, last) {
            (UpdateMode::Add, Some(previous)) => self.advance(previous, elapsed),
            _ => self.recompose(elapsed),
        };
        if self.partition_holds(&snapshot) {
            return Some(snapshot);
        }

        // Incremental state drifted; rebuild from the original area rather
        // than publish an inconsistent split.
        tracing::warn!(
            event = %self.event.id(),
            "sweep partition no longer tiles the area, recomposing"
        );
        let rebuilt = self.recompose(elapsed);
        self.partition_holds(&rebuilt).then_some(rebuilt)
    }

    fn advance(&self, previous: &WavePolygons, elapsed: Duration) -> WavePolygons {
        let mut counter = previous.max_cut_index().map_or(0, |index| index + 1);
        let mut traversed = previous.traversed().to_vec();
        let mut remaining = Vec::new();
        for ring in previous.remaining() {
            self.split_into(ring, elapsed, &mut counter, &mut traversed, &mut remaining);
        }
        WavePolygons::new(self.clock.now(), traversed, remaining)
    }

    fn recompose(&self, elapsed: Duration) -> WavePolygons {
        let mut counter = 0;
        let mut traversed = Vec::new();
        let mut remaining = Vec::new();
        for polygon in self.event.area().polygons() {
            let ring = polygon.sweep_ring();
            self.split_into(&ring, elapsed, &mut counter, &mut traversed, &mut remaining);
        }
        WavePolygons::new(self.clock.now(), traversed, remaining)
    }

    fn split_into(
        &self,
        ring: &SweepRing,
        elapsed: Duration,
        counter: &mut u32,
        traversed: &mut Vec<SweepRing>,
        remaining: &mut Vec<SweepRing>,
    ) {
        let Some(ring_bbox) = ring.bbox() else {
            return;
        };
        let area_bbox = self.event.area().bbox();

        let (swept, ahead) = match self.shape {
            WaveShape::Linear {
                speed_mps,
                direction,
            } => {
                // One vertical cut line per ring, evaluated at the ring's
                // widest latitude row
                let front = linear_front_longitude(
                    &area_bbox,
                    speed_mps,
                    direction,
                    elapsed,
                    ring_bbox.latitude_of_widest_part(),
                );
                let behind = move |p: &Position| match direction {
                    Direction::East => p.longitude <= front,
                    Direction::West => p.longitude >= front,
                };
                let crossing = move |a: &Position, b: &Position| {
                    let t = ((front - a.longitude) / (b.longitude - a.longitude)).clamp(0.0, 1.0);
                    Position::new(a.latitude + t * (b.latitude - a.latitude), front)
                };
                split_ring(ring.vertices(), behind, crossing, counter)
            }
            WaveShape::Circular {
                speed_mps,
                epicenter,
            } => {
                let radius = speed_mps * elapsed.as_secs_f64();
                let behind = move |p: &Position| haversine_distance(epicenter, *p) <= radius;
                let crossing =
                    move |a: &Position, b: &Position| circular_crossing(epicenter, radius, *a, *b);
                split_ring(ring.vertices(), behind, crossing, counter)
            }
        };

        if let Some(ring) = swept {
            traversed.push(ring);
        }
        if let Some(ring) = ahead {
            remaining.push(ring);
        }
    }

    /// Area-conservation check over the split: swept plus remaining must
    /// tile the original polygons.
    fn partition_holds(&self, snapshot: &WavePolygons) -> bool {
        let original: f64 = self
            .event
            .area()
            .polygons()
            .iter()
            .map(|polygon| polygon.sweep_ring().unsigned_area())
            .sum();
        (original - snapshot.total_area()).abs() <= original.max(1e-9) * 1e-6
    }
}
