//! Scoring module - line clear points and fall speed progression
//!
//! Scoring is a flat table: the number of rows cleared by one lock maps to
//! a fixed award with no level multiplier, combos or drop bonuses.

use crate::types::LINE_CLEAR_SCORES;

/// Points for clearing `lines` rows in a single lock (0 outside 1..=4)
pub fn line_clear_score(lines: u32) -> u32 {
    LINE_CLEAR_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Fall interval after one speed-up step, clamped at `min_ms`
pub fn next_fall_interval_ms(current_ms: u32, step_ms: u32, min_ms: u32) -> u32 {
    current_ms.saturating_sub(step_ms).max(min_ms)
}

/// Effective fall interval while soft drop is engaged
pub fn soft_drop_interval_ms(base_ms: u32, divisor: u32) -> u32 {
    (base_ms / divisor.max(1)).max(1)
}
