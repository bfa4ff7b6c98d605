//! One-rep max estimation using the Brzycki formula.
//!
//! The formula is only trusted for 1-10 reps; outside that range no
//! estimate is produced instead of extrapolating.

use crate::rounding::round_to_half;
use crate::SetSample;

/// Highest rep count the Brzycki formula is applied to
pub const MAX_ESTIMATION_REPS: i32 = 10;

const BRZYCKI_INTERCEPT: f64 = 1.0278;
const BRZYCKI_SLOPE: f64 = 0.0278;

/// Estimate a 1RM from one completed set
///
/// Returns `None` when `weight_kg <= 0` or `reps` is outside `1..=10`.
/// A single rep is already a max, so it is returned as-is.
pub fn estimate_one_rm(weight_kg: f64, reps: i32) -> Option<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return None;
    }
    if !(1..=MAX_ESTIMATION_REPS).contains(&reps) {
        return None;
    }

    if reps == 1 {
        return Some(weight_kg);
    }

    let brzycki = weight_kg / (BRZYCKI_INTERCEPT - BRZYCKI_SLOPE * f64::from(reps));
    Some(round_to_half(brzycki))
}

/// Highest estimate across a batch of sets
///
/// Sets that cannot be estimated are skipped. Returns `None` if none can.
pub fn best_estimated_one_rm<'a, I>(samples: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a SetSample>,
{
    samples
        .into_iter()
        .filter_map(|s| estimate_one_rm(s.weight_kg, s.reps))
        .fold(None, |best: Option<f64>, rm| {
            Some(best.map_or(rm, |b| b.max(rm)))
        })
}
