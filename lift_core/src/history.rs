//! Set history loading and per-exercise summaries.
//!
//! This module loads logged sets from a CSV export and condenses one
//! exercise's history into the inputs the suggestion composer needs.

use crate::config::{HistoryConfig, SuggestionConfig};
use crate::engine::smart_weight_suggestion_with;
use crate::estimate::best_estimated_one_rm;
use crate::{Error, ExerciseHistorySummary, HistoricalSet, Result, WeightSuggestion};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// CSV row format for logged sets
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    exercise: String,
    category: Option<String>,
    weight_kg: Option<f64>,
    reps: Option<i32>,
    completed: Option<bool>,
}

impl TryFrom<CsvRow> for HistoricalSet {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d")
            .map_err(|e| Error::History(format!("Invalid date '{}': {}", row.date, e)))?;

        let exercise = row.exercise.trim().to_string();
        if exercise.is_empty() {
            return Err(Error::History("Missing exercise name".into()));
        }

        let category = row
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(HistoricalSet {
            date,
            exercise,
            category,
            weight_kg: row.weight_kg,
            reps: row.reps,
            completed: row.completed.unwrap_or(true),
        })
    }
}

/// Load all logged sets from a CSV file
///
/// Expects the header `date,exercise,category,weight_kg,reps,completed`.
/// Rows that fail to parse are logged and skipped.
pub fn load_sets_from_csv(path: &Path) -> Result<Vec<HistoricalSet>> {
    if !path.exists() {
        return Err(Error::History(format!(
            "History file not found: {}",
            path.display()
        )));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut sets = Vec::new();
    for (line, result) in reader.deserialize::<CsvRow>().enumerate() {
        match result {
            Ok(row) => match HistoricalSet::try_from(row) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("Skipping row {}: {}", line + 1, e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize row {}: {}", line + 1, e);
            }
        }
    }

    tracing::info!("Loaded {} sets from {:?}", sets.len(), path);
    Ok(sets)
}

/// Summarise the recent history of one exercise
///
/// Only completed sets with reps and a finite, positive weight count. The newest
/// `max_sets` of those are kept; `recent_weights` holds the first set of
/// each of the newest `recent_sessions` training dates, oldest first.
/// Returns `None` when the exercise has no usable sets.
pub fn summarize_exercise(
    sets: &[HistoricalSet],
    exercise: &str,
    config: &HistoryConfig,
) -> Option<ExerciseHistorySummary> {
    let mut usable: Vec<&HistoricalSet> = sets
        .iter()
        .filter(|s| s.completed && s.exercise.eq_ignore_ascii_case(exercise))
        .filter(|s| s.sample().is_some())
        .collect();

    // Newest first; stable so same-day sets keep their logged order
    usable.sort_by(|a, b| b.date.cmp(&a.date));
    usable.truncate(config.max_sets);

    let samples: Vec<_> = usable.iter().filter_map(|s| s.sample()).collect();
    let newest = samples.first()?;

    let best_set = samples
        .iter()
        .map(|s| s.weight_kg)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut seen_dates = HashSet::new();
    let mut recent_weights: Vec<f64> = usable
        .iter()
        .filter(|s| seen_dates.insert(s.date))
        .take(config.recent_sessions)
        .filter_map(|s| s.weight_kg)
        .collect();
    recent_weights.reverse();

    tracing::debug!(
        "History for {}: {} sets, recent sessions {:?}",
        exercise,
        samples.len(),
        recent_weights
    );

    Some(ExerciseHistorySummary {
        exercise: exercise.to_string(),
        last_used: newest.weight_kg,
        best_set,
        estimated_one_rm: best_estimated_one_rm(&samples),
        recent_weights,
        set_count: samples.len(),
    })
}

/// Run the composer over a summarised history
pub fn suggest_for_exercise(
    summary: &ExerciseHistorySummary,
    one_rm: Option<f64>,
    target_reps: i32,
    target_rpe: u8,
    params: &SuggestionConfig,
) -> WeightSuggestion {
    smart_weight_suggestion_with(params, one_rm, target_reps, &summary.recent_weights, target_rpe)
}

/// All distinct exercise names in a history, in first-seen order
pub fn exercise_names(sets: &[HistoricalSet]) -> Vec<String> {
    let mut seen = HashSet::new();
    sets.iter()
        .filter(|s| seen.insert(s.exercise.to_lowercase()))
        .map(|s| s.exercise.clone())
        .collect()
}
