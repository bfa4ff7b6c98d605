//! Rescaling a working weight between effort levels.

use crate::rounding::round_to_half;
use crate::tables::percent_for_rpe;

/// RPE of a weight taken straight from the percentage table
pub const MAX_EFFORT_RPE: u8 = 10;

/// Rescale `base_weight`, lifted at `current_rpe`, for `target_rpe`
///
/// Equal RPEs return the base weight untouched (no rounding). Otherwise the
/// weight is scaled by the ratio of the two RPE percentages.
pub fn adjust_for_target_rpe(base_weight: f64, current_rpe: u8, target_rpe: u8) -> f64 {
    if current_rpe == target_rpe {
        return base_weight;
    }

    let ratio = f64::from(percent_for_rpe(target_rpe)) / f64::from(percent_for_rpe(current_rpe));
    round_to_half(base_weight * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_rpe_is_identity() {
        for rpe in 0..=12u8 {
            for w in [0.0, 33.3, 80.0, 101.17] {
                assert_eq!(adjust_for_target_rpe(w, rpe, rpe), w);
            }
        }
    }

    #[test]
    fn test_discount_from_max_effort() {
        // 89 * 0.90 = 80.1
        assert_eq!(adjust_for_target_rpe(89.0, MAX_EFFORT_RPE, 8), 80.0);
        assert_eq!(adjust_for_target_rpe(100.0, MAX_EFFORT_RPE, 9), 95.0);
        assert_eq!(adjust_for_target_rpe(100.0, MAX_EFFORT_RPE, 6), 80.0);
    }

    #[test]
    fn test_scaling_up_towards_max() {
        // 80 * 100 / 90 = 88.89
        assert_eq!(adjust_for_target_rpe(80.0, 8, MAX_EFFORT_RPE), 89.0);
    }

    #[test]
    fn test_unknown_rpe_scales_with_default() {
        // 85% / 100%
        assert_eq!(adjust_for_target_rpe(100.0, MAX_EFFORT_RPE, 3), 85.0);
        // Both unknown: same default on each side
        assert_eq!(adjust_for_target_rpe(72.5, 2, 4), 72.5);
    }
}
