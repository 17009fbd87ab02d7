//! Events and their schedule status.
//!
//! The wave model reads its area and start time from an upstream event it
//! does not own or mutate. The trait is the seam; [`StaticEvent`] is the
//! concrete in-memory implementation built from configuration.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use worldwidewaves_geo::Area;

/// Cheap-to-clone event id with pointer-fast equality.
#[derive(Clone, Debug)]
pub struct EventIdentifier(Arc<str>);

impl EventIdentifier {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EventIdentifier {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for EventIdentifier {}

impl Hash for EventIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for EventIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventIdentifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for EventIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An event as seen by the wave engine.
pub trait Event: Send + Sync {
    fn id(&self) -> &EventIdentifier;
    fn area(&self) -> &Area;
    fn wave_start(&self) -> DateTime<Utc>;

    /// Has the wave started and not yet finished at `now`?
    fn is_running(&self, now: DateTime<Utc>) -> bool;
    fn is_done(&self, now: DateTime<Utc>) -> bool;
}

/// Configuration an event is built from.
#[derive(Clone, Debug)]
pub struct EventConfig {
    pub id: EventIdentifier,
    pub area: Area,
    pub wave_start: DateTime<Utc>,
    /// Announced total duration, used for running/done status.
    pub approx_duration: Duration,
}

/// In-memory event definition.
pub struct StaticEvent {
    id: EventIdentifier,
    area: Area,
    wave_start: DateTime<Utc>,
    wave_end: DateTime<Utc>,
}

impl StaticEvent {
    pub fn new(config: EventConfig) -> Self {
        let wave_end = config.wave_start
            + chrono::Duration::milliseconds(config.approx_duration.as_millis() as i64);
        Self {
            id: config.id,
            area: config.area,
            wave_start: config.wave_start,
            wave_end,
        }
    }
}

impl Event for StaticEvent {
    fn id(&self) -> &EventIdentifier {
        &self.id
    }

    fn area(&self) -> &Area {
        &self.area
    }

    fn wave_start(&self) -> DateTime<Utc> {
        self.wave_start
    }

    fn is_running(&self, now: DateTime<Utc>) -> bool {
        now >= self.wave_start && now < self.wave_end
    }

    fn is_done(&self, now: DateTime<Utc>) -> bool {
        now >= self.wave_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{square_area, utc};

    #[test]
    fn test_identifier_equality() {
        let id1 = EventIdentifier::new("paris_2026");
        let id2 = EventIdentifier::new("paris_2026");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
    }

    #[test]
    fn test_identifier_display() {
        let id = EventIdentifier::new("tokyo_wave");
        assert_eq!(format!("{}", id), "tokyo_wave");
    }

    #[test]
    fn test_event_status_window() {
        let start = utc(2026, 8, 1, 12, 0, 0);
        let event = StaticEvent::new(EventConfig {
            id: "test".into(),
            area: square_area(),
            wave_start: start,
            approx_duration: Duration::from_secs(3600),
        });

        let before = utc(2026, 8, 1, 11, 0, 0);
        let during = utc(2026, 8, 1, 12, 30, 0);
        let after = utc(2026, 8, 1, 14, 0, 0);

        assert!(!event.is_running(before) && !event.is_done(before));
        assert!(event.is_running(during) && !event.is_done(during));
        assert!(!event.is_running(after) && event.is_done(after));

        // The window boundaries are inclusive at the start, exclusive at the end
        assert!(event.is_running(start));
        assert!(event.is_done(utc(2026, 8, 1, 13, 0, 0)));
    }
}
