//! Training volume per muscle-group category.

use crate::{CategoryVolume, HistoricalSet};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Category label for sets logged without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Count completed sets per category between `start` and `end` (inclusive)
///
/// Results are sorted by category name. An inverted range yields nothing.
pub fn volume_by_category(
    sets: &[HistoricalSet],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CategoryVolume> {
    if end < start {
        tracing::warn!("Volume range ends ({}) before it starts ({})", end, start);
        return Vec::new();
    }

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for set in sets
        .iter()
        .filter(|s| s.completed && s.date >= start && s.date <= end)
    {
        let category = set.category.as_deref().unwrap_or(UNCATEGORIZED);
        *by_category.entry(category).or_insert(0) += 1;
    }

    by_category
        .into_iter()
        .map(|(category, total_sets)| CategoryVolume {
            category: category.to_string(),
            total_sets,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_on(d: u32, category: Option<&str>, completed: bool) -> HistoricalSet {
        HistoricalSet {
            date: NaiveDate::from_ymd_opt(2024, 5, d).unwrap(),
            exercise: "Any".into(),
            category: category.map(String::from),
            weight_kg: Some(50.0),
            reps: Some(10),
            completed,
        }
    }

    fn may(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_counts_completed_sets_per_category() {
        let sets = vec![
            set_on(6, Some("legs"), true),
            set_on(6, Some("legs"), true),
            set_on(7, Some("chest"), true),
            set_on(7, Some("chest"), false),
            set_on(8, None, true),
        ];

        let volume = volume_by_category(&sets, may(6), may(12));
        assert_eq!(
            volume,
            vec![
                CategoryVolume { category: UNCATEGORIZED.into(), total_sets: 1 },
                CategoryVolume { category: "chest".into(), total_sets: 1 },
                CategoryVolume { category: "legs".into(), total_sets: 2 },
            ]
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let sets = vec![
            set_on(5, Some("back"), true),
            set_on(6, Some("back"), true),
            set_on(12, Some("back"), true),
            set_on(13, Some("back"), true),
        ];

        let volume = volume_by_category(&sets, may(6), may(12));
        assert_eq!(volume.len(), 1);
        assert_eq!(volume[0].total_sets, 2);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let sets = vec![set_on(6, Some("back"), true)];
        assert!(volume_by_category(&sets, may(12), may(6)).is_empty());
    }
}
