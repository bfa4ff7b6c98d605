//! Fixed percentage tables.
//!
//! Reps map to a percentage of 1RM, RPE maps to a percentage of maximal
//! effort at a given rep count. Values outside either table fall back to a
//! fixed default rather than an extrapolated formula.

use crate::rounding::round_to_half;

/// Percentage of 1RM used when target reps fall outside the table
pub const DEFAULT_REPS_PERCENT: u32 = 75;

/// Percentage of max effort used for RPE values outside the table ("RPE 7-8")
pub const DEFAULT_RPE_PERCENT: u32 = 85;

const REPS_PERCENTAGES: [(i32, u32); 15] = [
    (1, 100),
    (2, 95),
    (3, 93),
    (4, 90),
    (5, 89),
    (6, 86),
    (7, 83),
    (8, 81),
    (9, 78),
    (10, 75),
    (11, 73),
    (12, 71),
    (13, 69),
    (14, 67),
    (15, 65),
];

const RPE_PERCENTAGES: [(u8, u32); 5] = [(10, 100), (9, 95), (8, 90), (7, 85), (6, 80)];

/// Percentage of 1RM that can be lifted for `target_reps`
pub fn percent_for_reps(target_reps: i32) -> u32 {
    REPS_PERCENTAGES
        .iter()
        .find(|(reps, _)| *reps == target_reps)
        .map_or(DEFAULT_REPS_PERCENT, |(_, pct)| *pct)
}

/// Percentage of maximal effort represented by `rpe`
///
/// RPE 10 is a true max for the rep count, each point below leaves one
/// more rep in reserve. The scale is whole points only; half-point ratings
/// such as 8.5 have no table entry and must be rounded by the caller.
pub fn percent_for_rpe(rpe: u8) -> u32 {
    RPE_PERCENTAGES
        .iter()
        .find(|(r, _)| *r == rpe)
        .map_or(DEFAULT_RPE_PERCENT, |(_, pct)| *pct)
}

/// Working weight for `target_reps` at maximal effort, from a known 1RM
pub fn suggested_weight_from_rm(one_rm: f64, target_reps: i32) -> f64 {
    round_to_half(one_rm * f64::from(percent_for_reps(target_reps)) / 100.0)
}
