//! Scoring module - line-clear scoring, lock bonus, and the gravity curve
//!
//! Scoring scales with level and bucket width:
//! - each cleared line is worth `width * (level + 1)` points
//! - clearing several lines in one frame multiplies the per-line value by
//!   1/2/4/8 for 1/2/3/4 lines
//! - locking a piece awards `level + 1` points on its own
//!
//! Gravity lives here too: the per-frame drop-timer decrement grows
//! logarithmically with level, and soft drop enforces a fixed minimum
//! decrement so the fast drop is visible even at level 0.

use bucket_tetris_types::{FAST_DROP_MIN_STEP, LINE_MULTIPLIERS};

/// Points for clearing `lines` rows at once on a `width`-wide bucket
///
/// `lines == 0` scores nothing. The multiplier index clamps at four lines,
/// the most a single lock can complete.
pub fn line_clear_score(lines: usize, width: i32, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let per_line = width as u32 * (level + 1);
    let multiplier = LINE_MULTIPLIERS[(lines - 1).min(LINE_MULTIPLIERS.len() - 1)];
    lines as u32 * per_line * multiplier
}

/// Points awarded when a piece locks into the bucket
pub fn lock_bonus(level: u32) -> u32 {
    level + 1
}

/// Drop-timer decrement for one frame of normal gravity
///
/// `dt * (1 + ln(2*level + 1))`: level 0 falls one row per second and the
/// speed-up flattens as levels climb.
pub fn drop_speed(dt: f32, level: u32) -> f32 {
    dt * (1.0 + (2.0 * level as f32 + 1.0).ln())
}

/// Drop-timer decrement for one frame of soft drop
///
/// The level-derived speed still applies once it exceeds the fixed floor.
pub fn fast_drop_step(dt: f32, level: u32) -> f32 {
    drop_speed(dt, level).max(FAST_DROP_MIN_STEP)
}
