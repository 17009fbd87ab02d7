//! Adaptive recompute cadence.
//!
//! The observation loop asks, every tick, how long to sleep before the next
//! recompute. The answer trades timing precision against battery: tens of
//! milliseconds when a hit is imminent, seconds when it is not, a long floor
//! when the event is idle.

use std::time::Duration;

/// Cadence configuration. The defaults run at 50ms within 2s of a hit,
/// 250ms within 15s, 1s within a minute, 5s otherwise while running, and a
/// 30s floor when the event is idle.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    pub imminent_interval: Duration,
    pub near_interval: Duration,
    pub approaching_interval: Duration,
    pub routine_interval: Duration,
    pub idle_interval: Duration,

    pub imminent_within: Duration,
    pub near_within: Duration,
    pub approaching_within: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            imminent_interval: Duration::from_millis(50),
            near_interval: Duration::from_millis(250),
            approaching_interval: Duration::from_secs(1),
            routine_interval: Duration::from_secs(5),
            idle_interval: Duration::from_secs(30),

            imminent_within: Duration::from_secs(2),
            near_within: Duration::from_secs(15),
            approaching_within: Duration::from_secs(60),
        }
    }
}

/// What the observer currently knows about hit proximity.
#[derive(Clone, Copy, Debug)]
pub struct ProximitySignal {
    pub event_running: bool,
    /// Predicted time until the front reaches the user, if a fix exists.
    pub time_before_hit: Option<Duration>,
}

impl SchedulerConfig {
    /// Pick the next polling interval for the given signal.
    ///
    /// Hit proximity is ranked before event status: when an imminent-hit
    /// check and a routine status check are both due, the imminent one
    /// wins. An unknown proximity is treated as "not imminent" and falls
    /// back to a moderate default.
    pub fn next_interval(&self, signal: ProximitySignal) -> Duration {
        if let Some(remaining) = signal.time_before_hit {
            if remaining <= self.imminent_within {
                return self.imminent_interval;
            }
            if remaining <= self.near_within {
                return self.near_interval;
            }
            if remaining <= self.approaching_within {
                return self.approaching_interval;
            }
        }

        if !signal.event_running {
            return self.idle_interval;
        }

        match signal.time_before_hit {
            Some(_) => self.routine_interval,
            None => self.approaching_interval,
        }
    }
}
