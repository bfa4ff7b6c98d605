//! Progression analysis over recent session weights.
//!
//! This module implements the trend rules used when no 1RM is known:
//! - Split the history in two halves and compare their means
//! - Increasing trend: reward momentum with a larger increment
//! - Decreasing trend: hold the weight
//! - Stable: add the standard increment

use crate::rounding::round_to_half;
use crate::{ProgressionResult, Trend};

/// Standard load increment in kilograms
pub const DEFAULT_INCREMENT: f64 = 2.5;

/// Difference between half means (kg) needed to call a trend
const TREND_THRESHOLD_KG: f64 = 1.0;

/// Multiplier applied to the increment while the trend is increasing
const MOMENTUM_FACTOR: f64 = 1.5;

fn mean(weights: &[f64]) -> f64 {
    weights.iter().sum::<f64>() / weights.len() as f64
}

/// Detect the trend of an oldest-first weight history
///
/// The first half takes `ceil(n / 2)` elements, so the middle element of an
/// odd-length history counts towards the first half only. Fewer than two
/// samples is always stable.
pub fn detect_trend(recent_weights: &[f64]) -> Trend {
    if recent_weights.len() < 2 {
        return Trend::Stable;
    }

    let split = recent_weights.len().div_ceil(2);
    let (first_half, second_half) = recent_weights.split_at(split);
    let first_avg = mean(first_half);
    let second_avg = mean(second_half);

    if second_avg > first_avg + TREND_THRESHOLD_KG {
        Trend::Increasing
    } else if second_avg < first_avg - TREND_THRESHOLD_KG {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Increment to add on top of the last weight for a given trend
pub fn increment_for_trend(trend: Trend, standard_increment: f64) -> f64 {
    let increase = match trend {
        Trend::Increasing => standard_increment * MOMENTUM_FACTOR,
        Trend::Stable => standard_increment,
        Trend::Decreasing => 0.0,
    };
    round_to_half(increase)
}

/// Analyze an oldest-first history of session weights for one exercise
///
/// Returns `None` for an empty history.
pub fn analyze_progression(
    recent_weights: &[f64],
    standard_increment: f64,
) -> Option<ProgressionResult> {
    let last_weight = *recent_weights.last()?;

    let trend = detect_trend(recent_weights);
    let suggested_increase = increment_for_trend(trend, standard_increment);

    tracing::debug!(
        "Progression over {} sessions: trend {}, increase {}",
        recent_weights.len(),
        trend,
        suggested_increase
    );

    Some(ProgressionResult {
        average_weight: round_to_half(mean(recent_weights)),
        trend,
        suggested_increase,
        last_weight,
        session_count: recent_weights.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_is_none() {
        assert!(analyze_progression(&[], DEFAULT_INCREMENT).is_none());
    }

    #[test]
    fn test_single_session_is_stable() {
        let result = analyze_progression(&[50.0], DEFAULT_INCREMENT).unwrap();
        assert_eq!(result.trend, Trend::Stable);
        assert_eq!(result.last_weight, 50.0);
        assert_eq!(result.average_weight, 50.0);
        assert_eq!(result.suggested_increase, 2.5);
        assert_eq!(result.session_count, 1);
    }

    #[test]
    fn test_increasing_trend() {
        // First half [50, 55] = 52.5, second half [60]
        let result = analyze_progression(&[50.0, 55.0, 60.0], DEFAULT_INCREMENT).unwrap();
        assert_eq!(result.trend, Trend::Increasing);
        // 2.5 * 1.5 = 3.75
        assert_eq!(result.suggested_increase, 4.0);
        assert_eq!(result.average_weight, 55.0);
        assert_eq!(result.last_weight, 60.0);
    }

    #[test]
    fn test_decreasing_trend_holds_weight() {
        let result = analyze_progression(&[60.0, 55.0, 50.0], DEFAULT_INCREMENT).unwrap();
        assert_eq!(result.trend, Trend::Decreasing);
        assert_eq!(result.suggested_increase, 0.0);
        assert_eq!(result.last_weight, 50.0);
    }

    #[test]
    fn test_small_changes_are_stable() {
        let result = analyze_progression(&[60.0, 60.5, 61.0], DEFAULT_INCREMENT).unwrap();
        // 60.25 vs 61.0 is within the 1 kg threshold
        assert_eq!(result.trend, Trend::Stable);
        assert_eq!(result.suggested_increase, DEFAULT_INCREMENT);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(detect_trend(&[60.0, 61.0]), Trend::Stable);
        assert_eq!(detect_trend(&[61.0, 60.0]), Trend::Stable);
        assert_eq!(detect_trend(&[60.0, 61.5]), Trend::Increasing);
        assert_eq!(detect_trend(&[61.5, 60.0]), Trend::Decreasing);
    }

    #[test]
    fn test_odd_middle_belongs_to_first_half() {
        // [50, 50, 53] = 51 vs [51.5, 51.5]; a floor split would give 50 vs 52
        assert_eq!(detect_trend(&[50.0, 50.0, 53.0, 51.5, 51.5]), Trend::Stable);
        // [40, 40, 80] = 53.3 vs [60, 60]
        assert_eq!(detect_trend(&[40.0, 40.0, 80.0, 60.0, 60.0]), Trend::Increasing);
    }

    #[test]
    fn test_custom_increment() {
        let result = analyze_progression(&[100.0, 100.0], 5.0).unwrap();
        assert_eq!(result.trend, Trend::Stable);
        assert_eq!(result.suggested_increase, 5.0);

        let result = analyze_progression(&[90.0, 100.0], 5.0).unwrap();
        assert_eq!(result.suggested_increase, 7.5);

        // 1.25 rounds up to 1.5
        let result = analyze_progression(&[100.0], 1.25).unwrap();
        assert_eq!(result.suggested_increase, 1.5);
    }

    #[test]
    fn test_average_is_rounded() {
        let result = analyze_progression(&[50.0, 51.0, 51.0], DEFAULT_INCREMENT).unwrap();
        // 50.67 -> 50.5
        assert_eq!(result.average_weight, 50.5);
    }
}
