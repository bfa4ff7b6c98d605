//! Suggestion composer for the next working set.
//!
//! Two branches, no state kept between calls:
//! - A known 1RM drives the suggestion through the percentage tables and
//!   the RPE adjuster
//! - Without one, the recent weight history is analysed for a trend
//! - Without either, a fixed cold-start weight is suggested

use crate::config::SuggestionConfig;
use crate::progression::analyze_progression;
use crate::rounding::round_to_half;
use crate::rpe::{adjust_for_target_rpe, MAX_EFFORT_RPE};
use crate::tables::suggested_weight_from_rm;
use crate::{Trend, WeightSuggestion};

/// Target RPE used when the caller has no preference
pub const DEFAULT_TARGET_RPE: u8 = 8;

/// Suggested weight when there is neither a 1RM nor any history (kg)
pub const COLD_START_WEIGHT: f64 = 20.0;

/// Suggest the next working weight using default parameters
///
/// See [`smart_weight_suggestion_with`].
pub fn smart_weight_suggestion(
    one_rm: Option<f64>,
    target_reps: i32,
    recent_weights: &[f64],
    target_rpe: u8,
) -> WeightSuggestion {
    smart_weight_suggestion_with(
        &SuggestionConfig::default(),
        one_rm,
        target_reps,
        recent_weights,
        target_rpe,
    )
}

/// Suggest the next working weight
///
/// `recent_weights` holds one weight per session, oldest first. A 1RM that
/// is zero, negative or not finite is treated as unknown, and such history
/// weights are dropped. This never fails: the worst case is the configured
/// cold-start weight.
pub fn smart_weight_suggestion_with(
    params: &SuggestionConfig,
    one_rm: Option<f64>,
    target_reps: i32,
    recent_weights: &[f64],
    target_rpe: u8,
) -> WeightSuggestion {
    let known_rm = one_rm.filter(|rm| is_usable_weight(*rm));
    let weights: Vec<f64> = recent_weights
        .iter()
        .copied()
        .filter(|w| is_usable_weight(*w))
        .collect();
    if weights.len() < recent_weights.len() {
        tracing::debug!(
            "Dropped {} unusable history weights",
            recent_weights.len() - weights.len()
        );
    }

    if let Some(rm) = known_rm {
        return suggest_from_one_rm(rm, target_reps, &weights, target_rpe);
    }

    suggest_from_history(params, &weights)
}

fn is_usable_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

fn suggest_from_one_rm(
    one_rm: f64,
    target_reps: i32,
    recent_weights: &[f64],
    target_rpe: u8,
) -> WeightSuggestion {
    // The percentage table describes maximal effort
    let base = suggested_weight_from_rm(one_rm, target_reps);
    let adjusted = adjust_for_target_rpe(base, MAX_EFFORT_RPE, target_rpe);

    let last_weight = recent_weights.last().copied().unwrap_or(0.0);
    let increase = round_to_half(adjusted - last_weight);

    tracing::debug!(
        "1RM suggestion: {} kg x {} @ RPE {} -> base {}, adjusted {}",
        one_rm,
        target_reps,
        target_rpe,
        base,
        adjusted
    );

    WeightSuggestion {
        suggested_weight: adjusted,
        reason: format!(
            "Based on 1RM ({} kg) and {} reps @ RPE {}",
            one_rm, target_reps, target_rpe
        ),
        increase,
    }
}

fn suggest_from_history(params: &SuggestionConfig, recent_weights: &[f64]) -> WeightSuggestion {
    let Some(progression) = analyze_progression(recent_weights, params.standard_increment) else {
        tracing::debug!("No 1RM and no history, using cold-start weight");
        return WeightSuggestion {
            suggested_weight: round_to_half(params.cold_start_weight),
            reason: "Starting weight (no history)".to_string(),
            increase: 0.0,
        };
    };

    let suggested_weight = round_to_half(progression.last_weight + progression.suggested_increase);
    let increase = round_to_half(suggested_weight - progression.last_weight);

    let mut reason = String::from("Based on recent training");
    match progression.trend {
        Trend::Increasing => reason.push_str(" (increasing trend - push harder)"),
        Trend::Decreasing => reason.push_str(" (decreasing trend - hold weight)"),
        Trend::Stable => {}
    }

    WeightSuggestion {
        suggested_weight,
        reason,
        increase,
    }
}
