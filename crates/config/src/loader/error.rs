//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all fatal configuration loading failures.
//!
//! Does NOT handle:
//! - Missing or unreadable candidates during path discovery; those are skipped
//!   by the path resolver and never surface as errors.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, keys).
//! - Error messages NEVER include raw environment values to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}' in config file at {path}: expected {expected}")]
    InvalidFileValue {
        path: PathBuf,
        key: String,
        expected: &'static str,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}
