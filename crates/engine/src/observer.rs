//! Per-event observation loop.
//!
//! Each observed event runs one cooperative task: poll position, recompute
//! the sweep split, emit the delta, sleep for whatever interval the
//! scheduler picks, repeat. Loops for different events share nothing but
//! the clock and the position feed.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::scheduler::{ProximitySignal, SchedulerConfig};
use crate::wave::snapshot::{UpdateMode, WavePolygons};
use crate::wave::Wave;

/// A snapshot delivery to the rendering layer.
#[derive(Clone, Debug)]
pub struct WaveUpdate {
    pub polygons: WavePolygons,
    /// True when the split was rebuilt from scratch and previously drawn
    /// polygons must be cleared before applying this one.
    pub clear_existing: bool,
}

/// Handle to a running observation.
///
/// Stopping (or dropping the handle) cancels the loop's pending sleep
/// immediately; a stopped observation is not restartable — spawn a fresh
/// observer, which begins from clean state.
pub struct ObserverHandle {
    stop: watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

impl ObserverHandle {
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the loop to wind down.
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}

pub struct EventObserver {
    wave: Wave,
    scheduler: SchedulerConfig,
}

impl EventObserver {
    pub fn new(wave: Wave, scheduler: SchedulerConfig) -> Self {
        Self { wave, scheduler }
    }

    /// Start observing. Updates are delivered on `updates`; the loop stops
    /// on its own once the event is done and fully traversed, when the
    /// consumer goes away, or when the handle is stopped.
    pub fn spawn(self, updates: mpsc::Sender<WaveUpdate>) -> ObserverHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(updates, stop_rx));
        ObserverHandle {
            stop: stop_tx,
            task,
        }
    }

    async fn run(self, updates: mpsc::Sender<WaveUpdate>, mut stop: watch::Receiver<bool>) {
        let EventObserver { wave, scheduler } = self;
        let clock = wave.clock().clone();
        let event = wave.event().clone();

        tracing::debug!(event = %event.id(), "starting wave observation");

        let mut last: Option<WavePolygons> = None;
        let mut pending_recompose = false;

        loop {
            if *stop.borrow() {
                break;
            }

            let mode = if pending_recompose {
                UpdateMode::Recompose
            } else {
                UpdateMode::Add
            };
            if let Some(snapshot) = wave.wave_polygons(last.as_ref(), mode) {
                // A result that raced a stop must not reach the consumer
                if *stop.borrow() {
                    break;
                }
                let update = WaveUpdate {
                    polygons: snapshot.clone(),
                    clear_existing: mode == UpdateMode::Recompose,
                };
                if updates.send(update).await.is_err() {
                    tracing::debug!(event = %event.id(), "update consumer dropped, stopping");
                    break;
                }
                last = Some(snapshot);
                pending_recompose = false;
            }

            let now = clock.now();
            if event.is_done(now) && last.as_ref().map_or(true, WavePolygons::is_fully_traversed) {
                tracing::debug!(event = %event.id(), "wave fully traversed, observation complete");
                break;
            }

            let signal = ProximitySignal {
                event_running: event.is_running(now),
                time_before_hit: wave.time_before_hit(),
            };
            let interval = scheduler.next_interval(signal);

            let slept_from = clock.now();
            tokio::select! {
                _ = stop.changed() => break,
                _ = clock.sleep(interval) => {}
            }

            // A tick that arrives far too late means the device slept or
            // the app was backgrounded; correct state from scratch.
            let overshoot = (clock.now() - slept_from)
                .to_std()
                .unwrap_or(Duration::ZERO);
            if overshoot > interval.saturating_mul(2) {
                tracing::debug!(
                    event = %event.id(),
                    ?overshoot,
                    "observation gap detected, scheduling recompose"
                );
                pending_recompose = true;
            }
        }

        tracing::debug!(event = %event.id(), "wave observation stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::testing::{test_event, utc, FixedPosition, ManualClock};
    use crate::wave::{Direction, WaveShape};

    fn start() -> chrono::DateTime<chrono::Utc> {
        utc(2026, 8, 1, 12, 0, 0)
    }

    fn observer(clock: Arc<ManualClock>, approx_duration: Duration) -> EventObserver {
        let wave = Wave::new(
            test_event(start(), approx_duration),
            clock,
            Arc::new(FixedPosition(None)),
            WaveShape::Linear {
                speed_mps: 500.0,
                direction: Direction::East,
            },
        )
        .unwrap();
        EventObserver::new(wave, SchedulerConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_updates_until_done() {
        // 500 m/s across a ~1,096 km box: the crossing takes ~2,193 s
        let clock = ManualClock::new(start());
        let observer = observer(clock.clone(), Duration::from_secs(2400));

        let (tx, mut rx) = mpsc::channel(16);
        let handle = observer.spawn(tx);

        let mut updates = Vec::new();
        while let Some(update) = rx.recv().await {
            updates.push(update);
        }
        handle.wait().await;

        assert!(!updates.is_empty());
        // Incremental flow: nothing asked the renderer to clear
        assert!(updates.iter().all(|u| !u.clear_existing));
        // Traversed area only ever grows
        let areas: Vec<f64> = updates.iter().map(|u| u.polygons.traversed_area()).collect();
        assert!(areas.windows(2).all(|pair| pair[1] >= pair[0]));
        // The final snapshot covers the whole area
        assert!(updates.last().unwrap().polygons.is_fully_traversed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_promptly() {
        let clock = ManualClock::new(start());
        let observer = observer(clock, Duration::from_secs(2400));

        let (tx, mut rx) = mpsc::channel(16);
        let handle = observer.spawn(tx);

        // Let at least one update through, then stop
        let first = rx.recv().await;
        assert!(first.is_some());
        handle.stop();

        // The loop winds down without draining the event to completion
        let mut trailing = 0;
        while rx.recv().await.is_some() {
            trailing += 1;
        }
        assert!(trailing <= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gap_in_observation_triggers_recompose() {
        let clock = ManualClock::new(start());
        let observer = observer(clock.clone(), Duration::from_secs(2400));

        let (tx, mut rx) = mpsc::channel(16);
        let handle = observer.spawn(tx);

        let first = rx.recv().await.unwrap();
        assert!(!first.clear_existing);

        // Simulate the device sleeping through several intervals
        clock.inject_gap(Duration::from_secs(300));

        let mut saw_recompose = false;
        while let Some(update) = rx.recv().await {
            if update.clear_existing {
                saw_recompose = true;
                handle.stop();
            }
        }
        assert!(saw_recompose);
    }
}
