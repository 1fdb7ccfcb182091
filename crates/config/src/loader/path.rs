//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Build the ordered list of candidate config file paths.
//! - Pick the first candidate that is a readable regular file.
//! - Determine the user's home directory via the `directories` crate.
//!
//! Does NOT handle:
//! - Parsing file contents (see file.rs).
//! - The `RC3_CLI_CONFIG_PATH` override (applied by the builder after discovery).
//!
//! Invariants:
//! - The explicit path, when given and non-blank, is always the first candidate.
//! - Discovery is best-effort: a candidate that cannot be stat'ed or opened
//!   (permission denied included) is skipped, never fatal.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, SYSTEM_CONFIG_DIR, WORKING_DIR_FILE_NAME,
};

/// Returns the current user's home directory, if one can be determined.
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Returns the candidate config file paths in priority order:
///
/// 1. `explicit` (if present and non-blank)
/// 2. `<home>/.config/rc3/cli.toml`
/// 3. `<home>/.rc3/cli.toml`
/// 4. `rc3.toml` in the current working directory
/// 5. `/etc/rc3/cli.toml`
pub fn candidate_paths(explicit: Option<&Path>, home_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(5);

    if let Some(path) = explicit
        && !path.as_os_str().to_string_lossy().trim().is_empty()
    {
        candidates.push(path.to_path_buf());
    }

    if let Some(home) = home_dir
        && !home.as_os_str().is_empty()
    {
        candidates.push(home.join(".config").join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
        candidates.push(home.join(format!(".{APP_DIR_NAME}")).join(CONFIG_FILE_NAME));
    }

    candidates.push(PathBuf::from(WORKING_DIR_FILE_NAME));
    candidates.push(
        Path::new(SYSTEM_CONFIG_DIR)
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    );

    candidates
}

/// Check whether `path` is a regular file we can open for reading.
fn is_readable_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => match File::open(path) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "Skipping unreadable config candidate"
                );
                false
            }
        },
        Ok(_) => false,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "Skipping config candidate that cannot be stat'ed"
            );
            false
        }
    }
}

/// Returns the first candidate that exists as a readable regular file.
///
/// This is an existence check only; contents are not parsed here.
pub fn resolve_path(explicit: Option<&Path>, home_dir: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(explicit, home_dir)
        .into_iter()
        .find(|path| is_readable_file(path))
}
