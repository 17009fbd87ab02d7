//! Shared test fixtures.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use worldwidewaves_geo::{Area, AreaPolygon, Position};

use crate::clock::Clock;
use crate::event::{Event, EventConfig, StaticEvent};
use crate::position::PositionSource;

pub(crate) fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// A square polygon filling the bbox (south=10, west=20, north=15, east=30).
pub(crate) fn square_area() -> Area {
    Area::from_polygons(vec![AreaPolygon::from_positions(vec![
        Position::new(10.0, 20.0),
        Position::new(10.0, 30.0),
        Position::new(15.0, 30.0),
        Position::new(15.0, 20.0),
    ])
    .unwrap()])
    .unwrap()
}

pub(crate) fn test_event(wave_start: DateTime<Utc>, approx_duration: Duration) -> Arc<dyn Event> {
    Arc::new(StaticEvent::new(EventConfig {
        id: "test_event".into(),
        area: square_area(),
        wave_start,
        approx_duration,
    }))
}

pub(crate) fn event_with_area(wave_start: DateTime<Utc>, area: Area) -> Arc<dyn Event> {
    Arc::new(StaticEvent::new(EventConfig {
        id: "test_event".into(),
        area,
        wave_start,
        approx_duration: Duration::from_secs(3600),
    }))
}

/// Clock whose time only moves when a test says so. Sleeping advances the
/// clock by the requested amount (plus any injected gap) and yields briefly
/// so other tasks get to run.
pub(crate) struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    gap: Mutex<Duration>,
}

impl ManualClock {
    pub(crate) fn new(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(start),
            gap: Mutex::new(Duration::ZERO),
        })
    }

    pub(crate) fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap() = instant;
    }

    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::milliseconds(by.as_millis() as i64);
    }

    /// Make the next sleep overshoot by `extra`, as if the device slept.
    pub(crate) fn inject_gap(&self, extra: Duration) {
        *self.gap.lock().unwrap() = extra;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    fn sleep<'a>(
        &'a self,
        duration: Duration,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 'a>> {
        let gap = std::mem::take(&mut *self.gap.lock().unwrap());
        self.advance(duration + gap);
        Box::pin(tokio::time::sleep(Duration::from_millis(1)))
    }
}

/// Position source pinned to one value.
pub(crate) struct FixedPosition(pub(crate) Option<Position>);

impl PositionSource for FixedPosition {
    fn current_position(&self) -> Option<Position> {
        self.0
    }
}
