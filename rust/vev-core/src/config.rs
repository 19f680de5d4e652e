//! Unified configuration schema for the exercises.
//!
//! One YAML file carries the ranking capacity and the ferry layout plus its
//! weight-distribution thresholds. Every field has a default matching the
//! classroom constants, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default number of slots in a ranking.
pub const DEFAULT_RANKING_CAPACITY: usize = 20;

/// Default ferry rows.
pub const DEFAULT_ROWS: usize = 60;

/// Default seats in each ferry row.
pub const DEFAULT_SEATS_PER_ROW: usize = 20;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Leaderboard settings.
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Ferry seating settings.
    #[serde(default)]
    pub barca: BarcaConfig,
}

/// Leaderboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Maximum number of records kept; lower-scoring records fall off the end.
    #[serde(default = "default_ranking_capacity")]
    pub capacity: usize,
}

fn default_ranking_capacity() -> usize {
    DEFAULT_RANKING_CAPACITY
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            capacity: default_ranking_capacity(),
        }
    }
}

/// Ferry layout and weight-distribution thresholds.
///
/// The thresholds are compared against the occupied count *before* an
/// assignment:
/// - `occupied <= light_load_max`: only rows `<= front_rows_max` are open.
/// - `occupied <= medium_load_max`: only rows `>= rear_rows_min` are open.
/// - otherwise every row is open.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BarcaConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_seats_per_row")]
    pub seats_per_row: usize,
    #[serde(default = "default_light_load_max")]
    pub light_load_max: usize,
    #[serde(default = "default_medium_load_max")]
    pub medium_load_max: usize,
    #[serde(default = "default_front_rows_max")]
    pub front_rows_max: usize,
    #[serde(default = "default_rear_rows_min")]
    pub rear_rows_min: usize,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_seats_per_row() -> usize {
    DEFAULT_SEATS_PER_ROW
}

fn default_light_load_max() -> usize {
    100
}

fn default_medium_load_max() -> usize {
    200
}

fn default_front_rows_max() -> usize {
    20
}

fn default_rear_rows_min() -> usize {
    40
}

impl Default for BarcaConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            seats_per_row: default_seats_per_row(),
            light_load_max: default_light_load_max(),
            medium_load_max: default_medium_load_max(),
            front_rows_max: default_front_rows_max(),
            rear_rows_min: default_rear_rows_min(),
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("ranking.capacity must be positive"));
        }
        Ok(())
    }
}

impl BarcaConfig {
    /// Total seats on the ferry, or `None` if the layout cannot be allocated.
    pub fn total_seats(&self) -> Option<usize> {
        checked_seats(self.rows, self.seats_per_row)
    }

    /// Reject layouts no ferry can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.seats_per_row == 0 {
            return Err(ConfigError::Invalid(
                "barca.rows and barca.seats_per_row must be positive",
            ));
        }
        if self.total_seats().is_none() {
            return Err(ConfigError::Invalid(
                "barca.rows * barca.seats_per_row is too large",
            ));
        }
        if self.light_load_max > self.medium_load_max {
            return Err(ConfigError::Invalid(
                "barca.light_load_max must not exceed barca.medium_load_max",
            ));
        }
        if self.front_rows_max >= self.rows || self.rear_rows_min >= self.rows {
            return Err(ConfigError::Invalid(
                "barca.front_rows_max and barca.rear_rows_min must name rows on the ferry",
            ));
        }
        Ok(())
    }
}

/// `rows * seats_per_row`, capped at `isize::MAX` (the largest `Vec` length).
pub fn checked_seats(rows: usize, seats_per_row: usize) -> Option<usize> {
    rows.checked_mul(seats_per_row)
        .filter(|&n| n <= isize::MAX as usize)
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no ranking or ferry can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ranking.validate()?;
        self.barca.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_yaml() {
        let config =
            Config::load("../../configs/default.yaml").expect("Failed to load configs/default.yaml");
        assert_eq!(config, Config::default());
        assert_eq!(config.ranking.capacity, 20);
        assert_eq!(config.barca.total_seats(), Some(1200));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").expect("empty mapping is valid");
        assert_eq!(config.ranking.capacity, DEFAULT_RANKING_CAPACITY);
        assert_eq!(config.barca.rows, DEFAULT_ROWS);
        assert_eq!(config.barca.seats_per_row, DEFAULT_SEATS_PER_ROW);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let yaml = r#"
ranking:
  capacity: 5
barca:
  rows: 30
  front_rows_max: 10
  rear_rows_min: 20
"#;
        let config = Config::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.ranking.capacity, 5);
        assert_eq!(config.barca.rows, 30);
        assert_eq!(config.barca.seats_per_row, 20);
        assert_eq!(config.barca.light_load_max, 100);
        assert_eq!(config.barca.front_rows_max, 10);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Config::from_yaml("ranking:\n  capacity: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let yaml = "barca:\n  light_load_max: 300\n  medium_load_max: 200\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rows_outside_grid_rejected() {
        let yaml = "barca:\n  rows: 30\n";
        // rear_rows_min defaults to 40, which a 30-row ferry does not have.
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let cfg = BarcaConfig {
            rows: 0,
            ..BarcaConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
        let err = Config::from_yaml("barca:\n  rows: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_oversized_layout_rejected() {
        let cfg = BarcaConfig {
            rows: usize::MAX,
            seats_per_row: 2,
            ..BarcaConfig::default()
        };
        assert_eq!(cfg.total_seats(), None);
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
        assert_eq!(checked_seats(usize::MAX, 1), None);
        assert_eq!(checked_seats(60, 20), Some(1200));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = Config::from_yaml(invalid_yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_yaml_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut cfg = Config::default();
        cfg.ranking.capacity = 7;
        std::fs::write(&path, serde_yaml::to_string(&cfg).unwrap()).unwrap();
        let got = Config::load(&path).unwrap();
        assert_eq!(got.ranking.capacity, 7);
    }
}
