//! Core error types for recall-core.
//!
//! The engine itself is pure math and has few failure modes; errors are
//! confined to configuration handling and the strict quality-conversion
//! path.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for recall-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Review/scheduling errors
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Review-specific errors.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Quality rating outside the 0-3 scale on the strict conversion path.
    #[error("Invalid quality rating {value}: expected 0 (Again), 1 (Hard), 2 (Good) or 3 (Easy)")]
    InvalidQuality { value: i64 },

    /// Referenced item has no review state.
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
