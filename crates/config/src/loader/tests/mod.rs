//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test defaults handling and the zero config.
//! - Test precedence between defaults, config file and environment variables.
//! - Test the RC3_CLI_CONFIG_PATH override and file discovery through the loader.
//!
//! Does NOT handle:
//! - Environment variable parsing details (tested in env.rs).
//! - Candidate ordering details (tested in path.rs).
//!
//! Invariants:
//! - Most tests inject the environment as a map and never touch process state.
//! - Tests that read the real process environment use `serial_test` and `temp-env`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an injected environment from string pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write a config file below `dir` and return its path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
