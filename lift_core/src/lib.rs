#![forbid(unsafe_code)]

//! Progressive load suggestion engine for a strength-training logbook.
//!
//! This crate provides:
//! - 1RM estimation (Brzycki) and fixed percentage tables
//! - RPE adjustment of working weights
//! - Trend analysis over recent session weights
//! - The composer that turns all of the above into one suggestion
//! - Set history summaries and weekly volume for callers feeding the engine
//!
//! The calculation modules are pure: no I/O, no shared state.

pub mod types;
pub mod error;
pub mod rounding;
pub mod estimate;
pub mod tables;
pub mod rpe;
pub mod progression;
pub mod engine;
pub mod history;
pub mod volume;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, HistoryConfig, SuggestionConfig};
pub use rounding::round_to_half;
pub use estimate::{best_estimated_one_rm, estimate_one_rm};
pub use tables::{percent_for_reps, percent_for_rpe, suggested_weight_from_rm};
pub use rpe::adjust_for_target_rpe;
pub use progression::{analyze_progression, DEFAULT_INCREMENT};
pub use engine::{smart_weight_suggestion, smart_weight_suggestion_with, DEFAULT_TARGET_RPE};
pub use history::{load_sets_from_csv, suggest_for_exercise, summarize_exercise};
pub use volume::volume_by_category;
