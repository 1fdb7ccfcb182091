//! Config file loading.
//!
//! Responsibilities:
//! - Read a TOML config file and map its keys onto a typed overlay.
//!
//! Does NOT handle:
//! - Choosing which file to read (see path.rs).
//! - Environment variables (see env.rs).
//!
//! Invariants:
//! - Read, syntax and type errors are fatal and carry the file path.
//! - Scalars are converted loosely: `"true"`/`"false"` (and the other boolean
//!   spellings) are accepted for boolean keys, and numbers or booleans are
//!   stringified for string keys. Arrays, tables, dates and other strings
//!   for boolean keys are type errors.
//! - Unknown keys and nested tables are ignored so newer files keep working
//!   with older binaries.

use std::path::Path;

use super::env::parse_bool;
use super::error::ConfigError;
use super::overlay::{PartialConfig, RawValue, Setting};
use crate::schema::Field;

impl RawValue for toml::Value {
    fn into_bool(self) -> Option<bool> {
        match self {
            toml::Value::Boolean(b) => Some(b),
            toml::Value::String(s) => parse_bool(&s),
            _ => None,
        }
    }

    fn into_str(self) -> Option<String> {
        match self {
            toml::Value::String(s) => Some(s),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            toml::Value::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Read `path` and return the values it sets.
pub(crate) fn read_file_overlay(path: &Path) -> Result<PartialConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_file_overlay(&content, path)
}

/// Parse TOML `content` into an overlay. `path` is used for error context only.
pub(crate) fn parse_file_overlay(
    content: &str,
    path: &Path,
) -> Result<PartialConfig, ConfigError> {
    let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut overlay = PartialConfig::default();
    for (key, value) in table {
        let Some(field) = Field::from_name(&key) else {
            tracing::debug!(%key, path = %path.display(), "Ignoring unrecognized config key");
            continue;
        };

        let Some(setting) = Setting::parse(field, value) else {
            return Err(ConfigError::InvalidFileValue {
                path: path.to_path_buf(),
                key,
                expected: field.kind().describe(),
            });
        };
        overlay.set(setting);
    }

    Ok(overlay)
}
