//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Discover the config file among the candidate locations.
//! - Load the TOML config file and environment variables into a `CliConfig`.
//! - Provide a builder-pattern `ConfigLoader` with injectable environment.
//!
//! Does NOT handle:
//! - Validating the semantics of values (hosts, formats).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Config file values take precedence over the compiled-in defaults.

mod builder;
mod env;
mod error;
mod file;
mod overlay;
mod path;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, load_config};
pub use env::{
    EnvSource, SystemEnv, cli_env_vars, env_var_name, env_var_or_none, list_env_vars, parse_bool,
};
pub use error::ConfigError;
pub use path::{candidate_paths, home_dir, resolve_path};
