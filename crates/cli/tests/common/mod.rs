//! Shared test utilities for rc3 integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//!
//! Invariants / Assumptions:
//! - `HOME` and the working directory point at a fresh temp dir, so no real
//!   user config file is discovered.
//! - All `RC3_CLI_*` variables from the host are removed.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `rc3` command rooted at `home`.
pub fn rc3_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rc3");

    cmd.current_dir(home).env("HOME", home).env_remove("RUST_LOG");

    for (key, _) in std::env::vars() {
        if key.starts_with("RC3_CLI_") {
            cmd.env_remove(key);
        }
    }

    cmd
}
