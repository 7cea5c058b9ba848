//! Scheduler configuration.
//!
//! All tuning knobs for the engine live here rather than as module-level
//! constants, so the same engine can run under different tuning regimes
//! without recompilation:
//! - Starting ease factor and the hard ease floor
//! - Lapse penalty applied to the ease factor on a failed review
//! - Fixed intervals for the first repetition steps
//! - Default session size for the composer
//!
//! The CLI stores this as TOML at `~/.config/recall/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Scheduler configuration.
///
/// Serialized to/from TOML. Every field has a default so a partial file
/// (or no file at all) yields a working configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Ease factor assigned to items on first sight.
    #[serde(default = "default_starting_ease_factor")]
    pub starting_ease_factor: f64,
    /// Hard floor for the ease factor; no sequence of lapses goes below it.
    #[serde(default = "default_ease_floor")]
    pub ease_floor: f64,
    /// Subtracted from the ease factor on a failed review.
    #[serde(default = "default_lapse_penalty")]
    pub lapse_penalty: f64,
    /// Interval (days) after the first successful repetition.
    #[serde(default = "default_first_interval_days")]
    pub first_interval_days: u32,
    /// Interval (days) after the second successful repetition.
    #[serde(default = "default_second_interval_days")]
    pub second_interval_days: u32,
    /// Relearning interval (days) after a lapse.
    #[serde(default = "default_lapse_interval_days")]
    pub lapse_interval_days: u32,
    /// Maximum items per composed session when the caller does not pass a limit.
    #[serde(default = "default_session_size")]
    pub default_session_size: u32,
}

// Default functions
fn default_starting_ease_factor() -> f64 {
    2.5
}
fn default_ease_floor() -> f64 {
    1.3
}
fn default_lapse_penalty() -> f64 {
    0.2
}
fn default_first_interval_days() -> u32 {
    1
}
fn default_second_interval_days() -> u32 {
    6
}
fn default_lapse_interval_days() -> u32 {
    1
}
fn default_session_size() -> u32 {
    20
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            starting_ease_factor: default_starting_ease_factor(),
            ease_floor: default_ease_floor(),
            lapse_penalty: default_lapse_penalty(),
            first_interval_days: default_first_interval_days(),
            second_interval_days: default_second_interval_days(),
            lapse_interval_days: default_lapse_interval_days(),
            default_session_size: default_session_size(),
        }
    }
}

impl SchedulerConfig {
    /// Check internal consistency of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ease_floor.is_finite() || self.ease_floor <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "ease_floor".into(),
                message: format!("must be a positive number, got {}", self.ease_floor),
            });
        }
        if !self.starting_ease_factor.is_finite() || self.starting_ease_factor < self.ease_floor {
            return Err(ConfigError::InvalidValue {
                key: "starting_ease_factor".into(),
                message: format!(
                    "must be at least the ease floor ({}), got {}",
                    self.ease_floor, self.starting_ease_factor
                ),
            });
        }
        if !self.lapse_penalty.is_finite() || self.lapse_penalty < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "lapse_penalty".into(),
                message: format!("must be non-negative, got {}", self.lapse_penalty),
            });
        }
        for (key, days) in [
            ("first_interval_days", self.first_interval_days),
            ("second_interval_days", self.second_interval_days),
        ] {
            if days == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: "repetition step intervals must be at least one day".into(),
                });
            }
        }
        if self.lapse_interval_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "lapse_interval_days".into(),
                message: "lapsed items resurface the next day, not same-session".into(),
            });
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a single value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "starting_ease_factor" => Some(self.starting_ease_factor.to_string()),
            "ease_floor" => Some(self.ease_floor.to_string()),
            "lapse_penalty" => Some(self.lapse_penalty.to_string()),
            "first_interval_days" => Some(self.first_interval_days.to_string()),
            "second_interval_days" => Some(self.second_interval_days.to_string()),
            "lapse_interval_days" => Some(self.lapse_interval_days.to_string()),
            "default_session_size" => Some(self.default_session_size.to_string()),
            _ => None,
        }
    }

    /// Set a single value by key, validating the resulting configuration.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "starting_ease_factor" => updated.starting_ease_factor = parse_value(key, value)?,
            "ease_floor" => updated.ease_floor = parse_value(key, value)?,
            "lapse_penalty" => updated.lapse_penalty = parse_value(key, value)?,
            "first_interval_days" => updated.first_interval_days = parse_value(key, value)?,
            "second_interval_days" => updated.second_interval_days = parse_value(key, value)?,
            "lapse_interval_days" => updated.lapse_interval_days = parse_value(key, value)?,
            "default_session_size" => updated.default_session_size = parse_value(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
