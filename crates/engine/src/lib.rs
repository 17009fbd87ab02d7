//! # worldwidewaves-engine
//!
//! Timing engine for geographically-synchronized wave events: participants
//! at known locations are hit by a simulated wavefront traveling across a
//! bounded area at a defined speed.
//!
//! The engine consumes a [`clock::Clock`], a shared
//! [`position::PositionFeed`], and an [`event::Event`] definition, and
//! produces [`wave::snapshot::WavePolygons`] splits and hit predicates for
//! the rendering and notification layers. Nothing is persisted: wave state
//! is recomputed from configuration, clock, and position on every
//! observation tick.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use worldwidewaves_engine::prelude::*;
//! use worldwidewaves_geo::prelude::*;
//!
//! # fn demo(area: Area, start: chrono::DateTime<chrono::Utc>) -> worldwidewaves_engine::error::Result<()> {
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
//! let feed = PositionFeed::new();
//!
//! let event: Arc<dyn Event> = Arc::new(StaticEvent::new(EventConfig {
//!     id: "paris_2026".into(),
//!     area,
//!     wave_start: start,
//!     approx_duration: Duration::from_secs(3600),
//! }));
//!
//! let wave = Wave::new(
//!     event,
//!     clock,
//!     Arc::new(feed.subscribe()),
//!     WaveShape::Linear {
//!         speed_mps: 340.0,
//!         direction: Direction::East,
//!     },
//! )?;
//!
//! let (updates, _rx) = tokio::sync::mpsc::channel(16);
//! let handle = EventObserver::new(wave, SchedulerConfig::default()).spawn(updates);
//! # handle.stop();
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod event;
pub mod observer;
pub mod position;
pub mod scheduler;
pub mod wave;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub mod prelude {
    pub use crate::clock::{Clock, ClockConfig, SystemClock};
    pub use crate::error::{EngineError, Result};
    pub use crate::event::{Event, EventConfig, EventIdentifier, StaticEvent};
    pub use crate::observer::{EventObserver, ObserverHandle, WaveUpdate};
    pub use crate::position::{PositionFeed, PositionHandle, PositionSource};
    pub use crate::scheduler::{ProximitySignal, SchedulerConfig};
    pub use crate::wave::snapshot::{UpdateMode, WavePolygons};
    pub use crate::wave::{Direction, Wave, WaveShape};
}

pub use prelude::*;
