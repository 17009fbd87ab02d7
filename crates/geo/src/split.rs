//! Cutting closed rings against an advancing wavefront.
//!
//! The front's geometry enters only through two closures, so the same walk
//! serves a straight east-west sweep and a ring expanding from an
//! epicenter. The walk is a half-plane clip: each vertex lands on its side
//! of the front, and every edge whose endpoints straddle the front gets a
//! seam vertex inserted into both outputs.

use crate::position::Position;
use crate::ring::{CutVertex, SweepRing, SweepVertex};

/// Split one closed ring into its (behind-front, ahead-of-front) parts.
///
/// `ring` is the open form of a closed ring (the closing edge is implicit)
/// and may already contain seam vertices from an earlier split; those pass
/// through to whichever side they land on, keeping their cut indices.
///
/// `behind` classifies a point as already swept. It must be inclusive: a
/// point exactly on the front counts as behind. `crossing` locates the
/// front's intersection with an edge whose endpoints straddle it.
/// `cut_counter` numbers each crossing; the same number lands in both
/// outputs so the seam can be matched up again.
///
/// Returns `(None, Some(_))` for a ring entirely ahead of the front and
/// `(Some(_), None)` for one entirely behind it. Output slivers with fewer
/// than 3 vertices carry no area and are dropped.
pub fn split_ring<B, C>(
    ring: &[SweepVertex],
    behind: B,
    crossing: C,
    cut_counter: &mut u32,
) -> (Option<SweepRing>, Option<SweepRing>)
where
    B: Fn(&Position) -> bool,
    C: Fn(&Position, &Position) -> Position,
{
    let n = ring.len();
    let mut swept: Vec<SweepVertex> = Vec::new();
    let mut ahead: Vec<SweepVertex> = Vec::new();

    for i in 0..n {
        let current = &ring[i];
        let next = &ring[(i + 1) % n];
        let current_position = current.position();
        let next_position = next.position();
        let current_behind = behind(&current_position);

        if current_behind {
            swept.push(*current);
        } else {
            ahead.push(*current);
        }

        if current_behind != behind(&next_position) {
            let seam = SweepVertex::Cut(CutVertex {
                position: crossing(&current_position, &next_position),
                cut_index: *cut_counter,
                left: current_position,
                right: next_position,
            });
            *cut_counter += 1;
            swept.push(seam);
            ahead.push(seam);
        }
    }

    let keep = |vertices: Vec<SweepVertex>| {
        if vertices.len() >= 3 {
            Some(SweepRing::new(vertices))
        } else {
            None
        }
    };
    (keep(swept), keep(ahead))
}
