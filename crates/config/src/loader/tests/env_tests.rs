//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable overrides for file and default values.
//! - Test that empty and padded values are applied verbatim.
//! - Test handling of malformed environment variables.
//! - Test that the process environment is read when no source is injected.

use crate::loader::builder::{ConfigLoader, load_config};
use crate::loader::error::ConfigError;
use crate::types::CliConfig;
use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, env_of, write_config};

#[test]
fn test_env_overrides_file_and_defaults() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        ".config/rc3/cli.toml",
        "host = \"file:1\"\ntoken = \"file-token\"\n",
    );

    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[
            ("RC3_CLI_HOST", "env:2"),
            ("RC3_CLI_TOKEN", "env-token"),
        ]))
        .load()
        .unwrap();

    // Env var should take precedence over file
    assert_eq!(config.host, "env:2");
    assert_eq!(config.token.expose_secret(), "env-token");
}

#[test]
fn test_file_host_with_env_format() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        ".config/rc3/cli.toml",
        "host = \"example.com:9090\"\n",
    );

    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[("RC3_CLI_FORMAT", "json")]))
        .load()
        .unwrap();

    let expected = CliConfig {
        host: "example.com:9090".to_string(),
        format: "json".to_string(),
        ..CliConfig::with_defaults()
    };
    assert_eq!(config, expected);
}

#[test]
fn test_env_booleans() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), ".config/rc3/cli.toml", "detail = true\n");

    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[("RC3_CLI_DETAIL", "0"), ("RC3_CLI_NO_COLOR", "TRUE")]))
        .load()
        .unwrap();

    assert!(!config.detail, "env false overrides file true");
    assert!(config.no_color);
}

#[test]
fn test_empty_env_vars_override_file() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        ".config/rc3/cli.toml",
        "host = \"file:1\"\ntoken = \"file-token\"\ndetail = true\n",
    );

    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[
            ("RC3_CLI_HOST", ""),
            ("RC3_CLI_TOKEN", ""),
            ("RC3_CLI_DETAIL", ""),
        ]))
        .load()
        .unwrap();

    // A set-but-empty variable still wins over the file
    assert_eq!(config.host, "");
    assert!(config.token.expose_secret().is_empty());
    assert!(!config.detail);
}

#[test]
fn test_env_values_are_taken_verbatim() {
    let home = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[
            ("RC3_CLI_HOST", "  spaced:1  "),
            ("RC3_CLI_TOKEN", " tok "),
        ]))
        .load()
        .unwrap();

    assert_eq!(config.host, "  spaced:1  ");
    assert_eq!(config.token.expose_secret(), " tok ");
}

#[test]
fn test_invalid_env_bool_is_fatal() {
    let home = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[("RC3_CLI_NO_COLOR", "nope")]))
        .load();

    match result {
        Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RC3_CLI_NO_COLOR"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_lowercase_prefix_is_not_recognized() {
    let home = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[("rc3_cli_host", "ignored")]))
        .load()
        .unwrap();

    assert_eq!(config.host, "localhost:8080");
}

#[test]
fn test_env_with_mixed_case_suffix_maps_to_field() {
    let home = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_home_dir(home.path().to_path_buf())
        .with_env(env_of(&[("RC3_CLI_Host", "mixed:1")]))
        .load()
        .unwrap();

    assert_eq!(config.host, "mixed:1");
}

#[test]
#[serial]
fn test_load_config_reads_process_environment() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "cli.toml", "host = \"example.com:9090\"\n");
    let path_str = path.to_string_lossy().to_string();

    temp_env::with_vars(
        [
            ("RC3_CLI_CONFIG_PATH", Some(path_str.as_str())),
            ("RC3_CLI_FORMAT", Some("json")),
            ("RC3_CLI_HOST", None),
            ("RC3_CLI_TOKEN", None),
            ("RC3_CLI_DETAIL", None),
            ("RC3_CLI_NO_COLOR", None),
        ],
        || {
            let config = load_config(None, true).unwrap();
            assert_eq!(config.host, "example.com:9090");
            assert_eq!(config.format, "json");
            assert!(!config.detail);
            assert!(!config.no_color);
            assert!(config.token.expose_secret().is_empty());
        },
    );
}
