use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

use crate::core::SolverSettings;
use crate::models::{ScoreRange, ScoringPolicy};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub assignment: AssignmentSettings,
    #[serde(default)]
    pub solver: SolverSettings,
    #[serde(default)]
    pub loader: LoaderSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_score_range"))]
pub struct AssignmentSettings {
    #[serde(default)]
    pub policy: ScoringPolicy,
    /// Redraw scores at random when the inverted policy is active
    #[serde(default = "default_true")]
    pub randomize_inverted: bool,
    #[serde(default)]
    pub score_range: ScoreRange,
}

impl Default for AssignmentSettings {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            randomize_inverted: true,
            score_range: ScoreRange::default(),
        }
    }
}

fn default_true() -> bool { true }

fn validate_score_range(settings: &AssignmentSettings) -> Result<(), ValidationError> {
    if settings.score_range.min > settings.score_range.max {
        return Err(ValidationError::new("score_range_min_exceeds_max"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoaderSettings {
    /// Value columns dropped after the label column (price columns)
    #[serde(default = "default_skip_leading_columns")]
    pub skip_leading_columns: usize,
    /// Columns dropped from the right edge
    #[serde(default = "default_skip_trailing_columns")]
    pub skip_trailing_columns: usize,
    /// Rows dropped from the bottom (summary rows)
    #[serde(default = "default_skip_trailing_rows")]
    pub skip_trailing_rows: usize,
    #[validate(length(min = 1))]
    #[serde(default = "default_remote_base_url")]
    pub remote_base_url: String,
    #[validate(range(min = 1, max = 600))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            skip_leading_columns: default_skip_leading_columns(),
            skip_trailing_columns: default_skip_trailing_columns(),
            skip_trailing_rows: default_skip_trailing_rows(),
            remote_base_url: default_remote_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_skip_leading_columns() -> usize { 2 }
fn default_skip_trailing_columns() -> usize { 1 }
fn default_skip_trailing_rows() -> usize { 2 }
fn default_remote_base_url() -> String { "https://docs.google.com/spreadsheets".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. An explicit file, when given
    /// 5. Environment variables (prefixed with BOOK_ASSIGN__)
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        // e.g., BOOK_ASSIGN__SOLVER__MAX_ADJUSTMENT_FACTOR -> solver.max_adjustment_factor
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("BOOK_ASSIGN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check every section against its validation rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assignment
            .validate()
            .map_err(|e| ConfigError::Message(format!("assignment: {}", e)))?;
        self.solver
            .validate()
            .map_err(|e| ConfigError::Message(format!("solver: {}", e)))?;
        self.loader
            .validate()
            .map_err(|e| ConfigError::Message(format!("loader: {}", e)))?;
        Ok(())
    }
}
