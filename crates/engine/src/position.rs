//! Live GPS position feed.
//!
//! One platform-owned feed, fanned out to every active event observation.
//! No observer mutates the feed; each just reads the latest fix.

use tokio::sync::watch;
use worldwidewaves_geo::Position;

/// Source of the user's current position. `None` means no fix yet — a
/// normal, frequent state, not an error.
pub trait PositionSource: Send + Sync {
    fn current_position(&self) -> Option<Position>;
}

/// The single shared GPS feed. The platform layer publishes readings;
/// observers subscribe for read-only handles.
pub struct PositionFeed {
    sender: watch::Sender<Option<Position>>,
}

impl PositionFeed {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    pub fn publish(&self, position: Position) {
        self.sender.send_replace(Some(position));
    }

    /// Signal that the GPS fix was lost.
    pub fn clear(&self) {
        self.sender.send_replace(None);
    }

    pub fn subscribe(&self) -> PositionHandle {
        PositionHandle {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for PositionFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// One observer's read-only view of the shared feed.
#[derive(Clone)]
pub struct PositionHandle {
    receiver: watch::Receiver<Option<Position>>,
}

impl PositionSource for PositionHandle {
    fn current_position(&self) -> Option<Position> {
        *self.receiver.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_starts_without_fix() {
        let feed = PositionFeed::new();
        assert_eq!(feed.subscribe().current_position(), None);
    }

    #[test]
    fn test_feed_fans_out_to_all_handles() {
        let feed = PositionFeed::new();
        let first = feed.subscribe();
        let second = feed.subscribe();

        feed.publish(Position::new(48.85, 2.35));
        assert_eq!(first.current_position(), Some(Position::new(48.85, 2.35)));
        assert_eq!(second.current_position(), Some(Position::new(48.85, 2.35)));

        feed.clear();
        assert_eq!(first.current_position(), None);
    }

    #[test]
    fn test_subscribing_after_publish_sees_latest_fix() {
        let feed = PositionFeed::new();
        feed.publish(Position::new(35.68, 139.69));
        assert_eq!(
            feed.subscribe().current_position(),
            Some(Position::new(35.68, 139.69))
        );
    }
}
