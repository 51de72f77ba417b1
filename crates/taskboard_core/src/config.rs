//! Board configuration.
//!
//! # Responsibility
//! - Carry creation-form bounds and logging options in one value.
//! - Apply environment overrides for host processes.
//!
//! # Invariants
//! - `BoardConfig::default()` reproduces the stock form rules: description
//!   longer than 5 characters and 0 < people < 15.
//! - Malformed environment values are reported, never silently ignored.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";
pub const ENV_DESCRIPTION_MIN_LENGTH: &str = "TASKBOARD_DESCRIPTION_MIN_LENGTH";
pub const ENV_PEOPLE_MIN: &str = "TASKBOARD_PEOPLE_MIN";
pub const ENV_PEOPLE_MAX: &str = "TASKBOARD_PEOPLE_MAX";

const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
const DEFAULT_PEOPLE_MIN: f64 = 0.0;
const DEFAULT_PEOPLE_MAX: f64 = 15.0;

/// Exclusive bounds applied by the project input form.
///
/// Deserialization runs `InputRules::check`, so embedded config cannot carry
/// an unsatisfiable people range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InputRulesFields")]
pub struct InputRules {
    pub description_min_length: usize,
    pub people_min: f64,
    pub people_max: f64,
}

/// Unchecked wire shape of `InputRules`.
#[derive(Deserialize)]
#[serde(default)]
struct InputRulesFields {
    description_min_length: usize,
    people_min: f64,
    people_max: f64,
}

impl Default for InputRulesFields {
    fn default() -> Self {
        let rules = InputRules::default();
        Self {
            description_min_length: rules.description_min_length,
            people_min: rules.people_min,
            people_max: rules.people_max,
        }
    }
}

impl TryFrom<InputRulesFields> for InputRules {
    type Error = String;

    fn try_from(fields: InputRulesFields) -> Result<Self, Self::Error> {
        let rules = Self {
            description_min_length: fields.description_min_length,
            people_min: fields.people_min,
            people_max: fields.people_max,
        };
        rules.check()?;
        Ok(rules)
    }
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

/// Logging options handed to `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    pub level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub input: InputRules,
    pub logging: LoggingOptions,
}

impl BoardConfig {
    /// Builds config from defaults plus `TASKBOARD_*` process variables.
    ///
    /// # Errors
    /// - Returns an error when a numeric variable cannot be parsed.
    /// - Returns an error when the people bounds leave no valid value.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.logging.level = level;
        }
        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            config.logging.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = non_blank(lookup(ENV_DESCRIPTION_MIN_LENGTH)) {
            config.input.description_min_length = raw
                .parse()
                .map_err(|err| format!("invalid {ENV_DESCRIPTION_MIN_LENGTH} `{raw}`: {err}"))?;
        }
        if let Some(raw) = non_blank(lookup(ENV_PEOPLE_MIN)) {
            config.input.people_min = parse_bound(ENV_PEOPLE_MIN, &raw)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_PEOPLE_MAX)) {
            config.input.people_max = parse_bound(ENV_PEOPLE_MAX, &raw)?;
        }

        config.input.check()?;
        Ok(config)
    }
}

impl InputRules {
    /// Rejects bounds that no people count can satisfy.
    ///
    /// Counts are non-negative whole numbers, so the smallest candidate is
    /// the first whole number above `people_min`, but never below zero.
    pub fn check(&self) -> Result<(), String> {
        if !self.people_min.is_finite() || !self.people_max.is_finite() {
            return Err(format!(
                "people bounds ({}, {}) must be finite",
                self.people_min, self.people_max
            ));
        }
        let smallest_count = (self.people_min.floor() + 1.0).max(0.0);
        if self.people_max <= 0.0 || smallest_count >= self.people_max {
            return Err(format!(
                "people bounds ({}, {}) admit no whole number",
                self.people_min, self.people_max
            ));
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parse_bound(key: &str, raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|err| format!("invalid {key} `{raw}`: {err}"))?;
    if !value.is_finite() {
        return Err(format!("invalid {key} `{raw}`: bound must be finite"));
    }
    Ok(value)
}
