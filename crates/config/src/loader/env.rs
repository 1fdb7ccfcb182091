//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Abstract environment access behind `EnvSource` so tests can inject maps.
//! - Read `RC3_CLI_*` variables into a typed overlay.
//! - Derive the sorted list of recognized environment variable names.
//!
//! Does NOT handle:
//! - Loading from config files (see file.rs).
//! - Building the final CliConfig (see builder.rs).
//!
//! Invariants:
//! - Environment variables take precedence over config file values.
//! - Field values are taken verbatim: an empty `RC3_CLI_HOST` sets an empty
//!   host, and surrounding whitespace is kept.
//! - An empty value for a boolean field means `false`.
//! - `RC3_CLI_CONFIG_PATH` is read as an OS string; blank means unset.
//! - Invalid boolean values return ConfigError::InvalidValue without echoing the value.
//! - Unrecognized `RC3_CLI_*` keys (including `RC3_CLI_CONFIG_PATH`) are ignored.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::path::PathBuf;

use super::error::ConfigError;
use super::overlay::{PartialConfig, RawValue, Setting};
use crate::constants::{ENV_KEY_SEPARATOR, ENV_PREFIX};
use crate::schema::Field;

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Value of a single variable, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of a single variable without requiring UTF-8.
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.var(key).map(OsString::from)
    }

    /// All variables as key/value pairs, in no particular order.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The process environment. Entries that are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

/// Trim a raw value, returning None if it is empty or whitespace-only.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        // No trimming needed, return original to avoid allocation
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(env: &impl EnvSource, key: &str) -> Option<String> {
    env.var(key).and_then(non_blank)
}

/// Read a path-valued variable, returning None if unset or blank.
///
/// Non-UTF-8 values are kept as-is.
pub(crate) fn env_path_or_none(env: &impl EnvSource, key: &str) -> Option<PathBuf> {
    env.var_os(key)
        .filter(|value| !value.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}

/// Parse a boolean the way the CLI has always accepted it from the environment.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// A field value taken verbatim from the environment.
struct EnvValue(String);

impl RawValue for EnvValue {
    fn into_bool(self) -> Option<bool> {
        if self.0.is_empty() {
            return Some(false);
        }
        parse_bool(&self.0)
    }

    fn into_str(self) -> Option<String> {
        Some(self.0)
    }
}

/// Map an environment variable name to a config key.
///
/// Strips `prefix`, lowercases the rest and turns `__` into `.`. Returns None
/// for names without the prefix.
pub(crate) fn env_key_to_config_key(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    Some(rest.to_lowercase().replace(ENV_KEY_SEPARATOR, "."))
}

/// Collect every `RC3_CLI_*` variable into an overlay.
///
/// Variables are applied in name order so the result does not depend on the
/// iteration order of the source.
pub(crate) fn read_env_overlay(env: &impl EnvSource) -> Result<PartialConfig, ConfigError> {
    let mut vars: Vec<(String, String)> = env
        .vars()
        .into_iter()
        .filter(|(name, _)| name.starts_with(ENV_PREFIX))
        .collect();
    vars.sort();

    let mut overlay = PartialConfig::default();
    for (name, raw) in vars {
        let Some(key) = env_key_to_config_key(&name, ENV_PREFIX) else {
            continue;
        };
        let Some(field) = Field::from_name(&key) else {
            tracing::debug!(var = %name, "Ignoring unrecognized environment variable");
            continue;
        };
        let setting =
            Setting::parse(field, EnvValue(raw)).ok_or_else(|| ConfigError::InvalidValue {
                var: name.clone(),
                message: "must be true or false".to_string(),
            })?;
        tracing::debug!(var = %name, "Applying environment override");
        overlay.set(setting);
    }

    Ok(overlay)
}

/// Environment variable name for a single field.
pub fn env_var_name(prefix: &str, field: Field) -> String {
    format!("{}{}", prefix, field.name().to_uppercase())
}

/// All environment variable names recognized for `prefix`, sorted ascending.
pub fn list_env_vars(prefix: &str) -> Vec<String> {
    let mut vars: Vec<String> = Field::ALL
        .iter()
        .map(|field| env_var_name(prefix, *field))
        .collect();
    vars.sort();
    vars
}

/// The environment variables the rc3 CLI reads, sorted ascending.
pub fn cli_env_vars() -> Vec<String> {
    list_env_vars(ENV_PREFIX)
}
