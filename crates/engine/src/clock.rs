//! Wall-clock abstraction with a simulation speed mode.
//!
//! Wave timing is driven entirely through [`Clock`], so tests and demos can
//! play an hour-long wave in seconds by scaling elapsed time instead of
//! waiting in real time.

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

/// Clock construction parameters.
///
/// `speed_multiplier` scales elapsed time. Production always uses 1.0; the
/// multiplier is fixed for the life of the clock.
#[derive(Clone, Copy, Debug)]
pub struct ClockConfig {
    pub speed_multiplier: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
        }
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Suspend for a duration of clock time (real time divided by the
    /// simulation speed).
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// System clock, optionally running faster than real time.
pub struct SystemClock {
    anchor_utc: DateTime<Utc>,
    anchor: Instant,
    multiplier: f64,
}

impl SystemClock {
    pub fn new(config: ClockConfig) -> Self {
        let multiplier = if config.speed_multiplier.is_finite() && config.speed_multiplier > 0.0 {
            config.speed_multiplier
        } else {
            tracing::warn!(
                requested = config.speed_multiplier,
                "clamping invalid clock speed multiplier to 1.0"
            );
            1.0
        };
        Self {
            anchor_utc: Utc::now(),
            anchor: Instant::now(),
            multiplier,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let scaled = self.anchor.elapsed().mul_f64(self.multiplier);
        self.anchor_utc + chrono::Duration::milliseconds(scaled.as_millis() as i64)
    }

    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        let real = duration.div_f64(self.multiplier);
        Box::pin(tokio::time::sleep(real))
    }
}
