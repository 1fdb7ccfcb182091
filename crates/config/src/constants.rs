//! Centralized constants for the rc3 CLI configuration.
//!
//! Default values and well-known names live here so the loader, the path
//! resolver and the CLI agree on them.

// =============================================================================
// Environment
// =============================================================================

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "RC3_CLI_";

/// Separator between hierarchical key segments in environment variable names.
pub const ENV_KEY_SEPARATOR: &str = "__";

/// Environment variable that overrides the configuration file path.
///
/// This is not a schema field; it wins over every discovered path.
pub const CONFIG_PATH_ENV_VAR: &str = "RC3_CLI_CONFIG_PATH";

// =============================================================================
// Defaults
// =============================================================================

/// Default server address.
pub const DEFAULT_HOST: &str = "localhost:8080";

/// Default output style.
pub const DEFAULT_FORMAT: &str = "pretty";

// =============================================================================
// File locations
// =============================================================================

/// Directory name used below the user's home and system config directories.
pub const APP_DIR_NAME: &str = "rc3";

/// File name of the CLI configuration file.
pub const CONFIG_FILE_NAME: &str = "cli.toml";

/// File name looked up in the current working directory.
pub const WORKING_DIR_FILE_NAME: &str = "rc3.toml";

/// System-wide configuration directory.
pub const SYSTEM_CONFIG_DIR: &str = "/etc";
