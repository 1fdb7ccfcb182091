//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Build a `ConfigLoader` from the global options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not read `RC3_CLI_*` variables itself; the loader owns that.

use clap::{Parser, Subcommand};
use rc3_config::ConfigLoader;
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "rc3")]
#[command(about = "rc3 CLI - inspect the resolved client configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  rc3 config show\n  rc3 --config ./cli.toml config show\n  RC3_CLI_FORMAT=json rc3 config show\n  rc3 config env-vars\n"
)]
pub struct Cli {
    /// Path to a configuration file, tried before the default locations.
    ///
    /// RC3_CLI_CONFIG_PATH, when set, overrides this and every default location.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from an empty configuration instead of the built-in defaults
    #[arg(long, global = true)]
    pub no_defaults: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the CLI configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

impl Cli {
    /// Build a loader reflecting the global options.
    ///
    /// Blank `--config` values are ignored so discovery falls back to the defaults.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new().with_defaults(!self.no_defaults);
        if let Some(ref path) = self.config
            && !path.to_string_lossy().trim().is_empty()
        {
            loader = loader.with_explicit_path(path.clone());
        }
        loader
    }
}
