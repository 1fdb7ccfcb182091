//! Configuration management for the rc3 CLI.
//!
//! This crate resolves the effective CLI configuration from the compiled-in
//! defaults, an optional TOML file and `RC3_CLI_*` environment variables.

pub mod constants;
mod loader;
pub mod schema;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvSource, SystemEnv, candidate_paths, cli_env_vars, env_var_name,
    env_var_or_none, home_dir, list_env_vars, load_config, parse_bool, resolve_path,
};
pub use schema::{Field, FieldKind, field_names};
pub use types::CliConfig;
