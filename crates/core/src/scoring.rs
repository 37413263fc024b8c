//! Scoring and gravity speed-up for line clears.

use crate::types::{CLEAR_SCORES, MIN_FALL_INTERVAL_MS, SPEEDUP_PER_LINE_MS};

/// Points for clearing `lines` rows in one merge.
///
/// A single merge can clear at most four rows; anything outside 1..=4 scores
/// nothing.
pub fn line_clear_score(lines: usize) -> u32 {
    CLEAR_SCORES.get(lines).copied().unwrap_or(0)
}

/// Gravity interval after clearing `lines` rows: 20 ms faster per row,
/// floored at the minimum interval. Never slows back down.
pub fn next_fall_interval(current_ms: u32, lines: usize) -> u32 {
    if lines == 0 {
        return current_ms;
    }
    current_ms
        .saturating_sub(SPEEDUP_PER_LINE_MS * lines as u32)
        .max(MIN_FALL_INTERVAL_MS)
}
