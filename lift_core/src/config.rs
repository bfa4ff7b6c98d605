//! Configuration file support for Lift.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/lift/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub suggestion: SuggestionConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Parameters for the weight suggestion composer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SuggestionConfig {
    /// Load added per session while the trend is stable (kg)
    #[serde(default = "default_standard_increment")]
    pub standard_increment: f64,

    #[serde(default = "default_target_reps")]
    pub default_target_reps: i32,

    #[serde(default = "default_target_rpe")]
    pub default_target_rpe: u8,

    /// Suggested weight for an exercise with no 1RM and no history (kg)
    #[serde(default = "default_cold_start_weight")]
    pub cold_start_weight: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            standard_increment: default_standard_increment(),
            default_target_reps: default_target_reps(),
            default_target_rpe: default_target_rpe(),
            cold_start_weight: default_cold_start_weight(),
        }
    }
}

/// Windowing applied when summarising a set history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Number of most recent sessions fed to the progression analyzer
    #[serde(default = "default_recent_sessions")]
    pub recent_sessions: usize,

    /// Number of most recent sets considered at all
    #[serde(default = "default_max_sets")]
    pub max_sets: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_sessions: default_recent_sessions(),
            max_sets: default_max_sets(),
        }
    }
}

// Default value functions
fn default_standard_increment() -> f64 {
    crate::progression::DEFAULT_INCREMENT
}

fn default_target_reps() -> i32 {
    5
}

fn default_target_rpe() -> u8 {
    crate::engine::DEFAULT_TARGET_RPE
}

fn default_cold_start_weight() -> f64 {
    crate::engine::COLD_START_WEIGHT
}

fn default_recent_sessions() -> usize {
    3
}

fn default_max_sets() -> usize {
    30
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("lift").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let s = &self.suggestion;
        if !s.standard_increment.is_finite() || s.standard_increment <= 0.0 {
            return Err(Error::Config(format!(
                "standard_increment must be positive, got {}",
                s.standard_increment
            )));
        }
        if !s.cold_start_weight.is_finite() || s.cold_start_weight <= 0.0 {
            return Err(Error::Config(format!(
                "cold_start_weight must be positive, got {}",
                s.cold_start_weight
            )));
        }
        if s.default_target_reps < 1 {
            return Err(Error::Config(format!(
                "default_target_reps must be at least 1, got {}",
                s.default_target_reps
            )));
        }
        if self.history.recent_sessions == 0 || self.history.max_sets == 0 {
            return Err(Error::Config("history windows must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.suggestion.standard_increment, 2.5);
        assert_eq!(config.suggestion.default_target_reps, 5);
        assert_eq!(config.suggestion.default_target_rpe, 8);
        assert_eq!(config.suggestion.cold_start_weight, 20.0);
        assert_eq!(config.history.recent_sessions, 3);
        assert_eq!(config.history.max_sets, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.suggestion.standard_increment = 5.0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[suggestion]
default_target_rpe = 9
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.suggestion.default_target_rpe, 9);
        assert_eq!(config.suggestion.standard_increment, 2.5); // default
        assert_eq!(config.history.recent_sessions, 3); // default
    }

    #[test]
    fn test_invalid_increment_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[suggestion]\nstandard_increment = 0.0\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_cold_start_rejected() {
        for weight in [0.0, -20.0, f64::NAN] {
            let mut config = Config::default();
            config.suggestion.cold_start_weight = weight;
            assert!(matches!(config.validate(), Err(Error::Config(_))));
        }
    }

    #[test]
    fn test_zero_target_reps_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[suggestion]\ndefault_target_reps = 0\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_history_window_rejected() {
        let mut config = Config::default();
        config.history.recent_sessions = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[suggestion\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
