//! Scoring module - flat per-line scoring
//!
//! Every cleared row is worth the same amount regardless of how many rows
//! clear together. There are no levels, combos or drop bonuses.

use crate::types::POINTS_PER_LINE;

/// Points awarded for clearing `lines` rows in one lock
pub fn line_clear_points(lines: usize) -> u32 {
    u32::try_from(lines)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_LINE)
}
