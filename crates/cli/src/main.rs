//! rc3 CLI - inspect the resolved client configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging (stderr only, filtered by `RUST_LOG`).
//! - Run the requested command and map failures to exit codes.
//!
//! Does NOT handle:
//! - Configuration resolution rules (see `crates/config`).
//!
//! Invariants:
//! - Logs never go to stdout so command output stays machine readable.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        config = ?cli.config,
        no_defaults = cli.no_defaults,
        "Resolving configuration"
    );
    let loader = cli.loader();
    let result = match cli.command {
        Commands::Config { command } => commands::config::run(command, &loader),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}
