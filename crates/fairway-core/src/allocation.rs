//! Handicap stroke allocation across the 18 holes.

use crate::course::HOLE_COUNT;

/// Strokes a player with `handicap` receives on a hole ranked
/// `allocation_index` (1 = hardest).
///
/// A handicap of 20 gives one stroke on every hole plus a second stroke on
/// the two hardest holes. Plus handicaps give strokes back, easiest hole
/// first, so the result is negative.
pub fn strokes_received(handicap: i32, allocation_index: u8) -> i32 {
    let holes = HOLE_COUNT as i32;
    let index = allocation_index.clamp(1, HOLE_COUNT) as i32;
    let magnitude = handicap.abs();
    let base = magnitude / holes;
    let extra = magnitude % holes;
    if handicap >= 0 {
        base + i32::from(index <= extra)
    } else {
        -(base + i32::from(index > holes - extra))
    }
}

/// Net score for one hole.
pub fn net_strokes(gross: u8, handicap: i32, allocation_index: u8) -> i32 {
    gross as i32 - strokes_received(handicap, allocation_index)
}
