//! Wave-state snapshots.

use chrono::{DateTime, Utc};
use worldwidewaves_geo::SweepRing;

/// How a new snapshot is derived from the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// Grow the traversed set incrementally from the last snapshot.
    /// Cheaper; assumes monotonic forward progress.
    Add,
    /// Recompute both sets from the original area, discarding prior
    /// incremental state. Used when state must be corrected, e.g. after a
    /// gap in observation.
    Recompose,
}

/// Immutable traversed/remaining split of an event area at one instant.
///
/// Reassembling the two sets along matching cut indices reconstructs the
/// original area polygons: the split only partitions, it never gains or
/// loses area.
#[derive(Clone, Debug)]
pub struct WavePolygons {
    timestamp: DateTime<Utc>,
    traversed: Vec<SweepRing>,
    remaining: Vec<SweepRing>,
}

impl WavePolygons {
    pub fn new(
        timestamp: DateTime<Utc>,
        traversed: Vec<SweepRing>,
        remaining: Vec<SweepRing>,
    ) -> Self {
        Self {
            timestamp,
            traversed,
            remaining,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Rings the wavefront has already swept.
    pub fn traversed(&self) -> &[SweepRing] {
        &self.traversed
    }

    /// Rings the wavefront has not yet reached.
    pub fn remaining(&self) -> &[SweepRing] {
        &self.remaining
    }

    pub fn is_fully_traversed(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Highest cut index across both sets, used to seed the next
    /// incremental split so seam indices stay unique per snapshot chain.
    pub fn max_cut_index(&self) -> Option<u32> {
        self.traversed
            .iter()
            .chain(self.remaining.iter())
            .filter_map(|ring| ring.max_cut_index())
            .max()
    }

    pub fn traversed_area(&self) -> f64 {
        self.traversed.iter().map(SweepRing::unsigned_area).sum()
    }

    pub fn remaining_area(&self) -> f64 {
        self.remaining.iter().map(SweepRing::unsigned_area).sum()
    }

    pub fn total_area(&self) -> f64 {
        self.traversed_area() + self.remaining_area()
    }
}
