//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Resolve the config file path, honoring the `RC3_CLI_CONFIG_PATH` override.
//! - Build the final `CliConfig` from defaults, file and environment overlays.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - TOML parsing (delegated to file.rs).
//! - Candidate discovery rules (delegated to path.rs).
//!
//! Invariants / Assumptions:
//! - Precedence is defaults < file < environment variables.
//! - `RC3_CLI_CONFIG_PATH` replaces any discovered path, even one that does not
//!   exist; a missing override target is a fatal read error.
//! - Loading reads at most one file and never writes.

use std::path::{Path, PathBuf};

use super::env::{EnvSource, SystemEnv, env_path_or_none, read_env_overlay};
use super::error::ConfigError;
use super::file::read_file_overlay;
use super::path::{home_dir, resolve_path};
use crate::constants::CONFIG_PATH_ENV_VAR;
use crate::types::CliConfig;

/// Configuration loader that layers defaults, a config file and environment variables.
#[derive(Debug, Clone)]
pub struct ConfigLoader<E = SystemEnv> {
    use_defaults: bool,
    explicit_path: Option<PathBuf>,
    home_dir: Option<PathBuf>,
    env: E,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new loader that reads the process environment and starts from
    /// the compiled-in defaults.
    pub fn new() -> Self {
        Self {
            use_defaults: true,
            explicit_path: None,
            home_dir: None,
            env: SystemEnv,
        }
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Start from the compiled-in defaults (`true`) or the zero config (`false`).
    pub fn with_defaults(mut self, use_defaults: bool) -> Self {
        self.use_defaults = use_defaults;
        self
    }

    /// Set the path supplied by the user (e.g. via `--config`).
    ///
    /// It is only the first discovery candidate; `RC3_CLI_CONFIG_PATH` still wins.
    pub fn with_explicit_path(mut self, path: PathBuf) -> Self {
        self.explicit_path = Some(path);
        self
    }

    /// Override the home directory used for fallback locations (primarily for testing).
    pub fn with_home_dir(mut self, path: PathBuf) -> Self {
        self.home_dir = Some(path);
        self
    }

    /// Replace the environment source (primarily for testing).
    pub fn with_env<F: EnvSource>(self, env: F) -> ConfigLoader<F> {
        ConfigLoader {
            use_defaults: self.use_defaults,
            explicit_path: self.explicit_path,
            home_dir: self.home_dir,
            env,
        }
    }

    /// Determine which config file will be read, if any.
    ///
    /// Discovery runs first; a non-blank `RC3_CLI_CONFIG_PATH` then replaces
    /// its result unconditionally.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        let home = self.home_dir.clone().or_else(home_dir);
        let discovered = resolve_path(self.explicit_path.as_deref(), home.as_deref());

        match env_path_or_none(&self.env, CONFIG_PATH_ENV_VAR) {
            Some(overridden) => {
                tracing::debug!(
                    path = %overridden.display(),
                    "Config path overridden by {}",
                    CONFIG_PATH_ENV_VAR
                );
                Some(overridden)
            }
            None => discovered,
        }
    }

    /// Build the final configuration.
    pub fn load(&self) -> Result<CliConfig, ConfigError> {
        let mut config = if self.use_defaults {
            CliConfig::with_defaults()
        } else {
            CliConfig::default()
        };

        if let Some(path) = self.resolve_path() {
            tracing::debug!(path = %path.display(), "Loading config file");
            let file_overlay = read_file_overlay(&path)?;
            if file_overlay.is_empty() {
                tracing::debug!(path = %path.display(), "Config file sets no recognized keys");
            }
            file_overlay.apply_to(&mut config);
        }

        read_env_overlay(&self.env)?.apply_to(&mut config);

        Ok(config)
    }
}

/// Load the CLI configuration from the standard sources.
///
/// `explicit_path` is the user-supplied path (blank or `None` means none).
/// When `use_defaults` is false the result starts from the zero config.
pub fn load_config(
    explicit_path: Option<&Path>,
    use_defaults: bool,
) -> Result<CliConfig, ConfigError> {
    let mut loader = ConfigLoader::new().with_defaults(use_defaults);
    if let Some(path) = explicit_path {
        loader = loader.with_explicit_path(path.to_path_buf());
    }
    loader.load()
}
