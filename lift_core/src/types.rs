//! Core value types for the load suggestion engine.
//!
//! Everything here is a transient value: created by the caller or by one
//! engine call, consumed, and dropped. Nothing carries identity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Engine Types
// ============================================================================

/// One completed set, the raw input to 1RM estimation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SetSample {
    pub weight_kg: f64,
    pub reps: i32,
}

impl SetSample {
    pub fn new(weight_kg: f64, reps: i32) -> Self {
        Self { weight_kg, reps }
    }
}

/// Direction of recent session weights for one exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Increasing => "increasing",
            Trend::Stable => "stable",
            Trend::Decreasing => "decreasing",
        };
        f.write_str(label)
    }
}

/// Outcome of analysing a weight history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressionResult {
    pub average_weight: f64,
    pub trend: Trend,
    pub suggested_increase: f64,
    pub last_weight: f64,
    pub session_count: usize,
}

/// Suggested weight for the next set, with a human-readable justification
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightSuggestion {
    pub suggested_weight: f64,
    pub reason: String,
    /// Suggested weight minus the last known weight (0 without history)
    pub increase: f64,
}

// ============================================================================
// History Types
// ============================================================================

/// A logged set as the data store returns it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoricalSet {
    pub date: NaiveDate,
    pub exercise: String,
    pub category: Option<String>,
    pub weight_kg: Option<f64>,
    pub reps: Option<i32>,
    pub completed: bool,
}

impl HistoricalSet {
    /// The set as a [`SetSample`], if both reps and a finite, positive
    /// weight were logged
    pub fn sample(&self) -> Option<SetSample> {
        match (self.weight_kg, self.reps) {
            (Some(weight_kg), Some(reps)) if weight_kg.is_finite() && weight_kg > 0.0 => {
                Some(SetSample { weight_kg, reps })
            }
            _ => None,
        }
    }
}

/// Per-exercise digest of recent history, ready to feed the composer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseHistorySummary {
    pub exercise: String,
    pub last_used: f64,
    pub best_set: f64,
    pub estimated_one_rm: Option<f64>,
    /// One weight per recent session, oldest first
    pub recent_weights: Vec<f64>,
    pub set_count: usize,
}

/// Completed working sets for one muscle-group category
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryVolume {
    pub category: String,
    pub total_sets: usize,
}
