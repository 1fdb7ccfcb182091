//! Configuration types for the rc3 CLI.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::constants::{DEFAULT_FORMAT, DEFAULT_HOST};

/// Effective CLI configuration after all sources have been merged.
///
/// `CliConfig::default()` is the zero-valued configuration. Use
/// [`CliConfig::with_defaults`] for the compiled-in baseline.
#[derive(Clone)]
pub struct CliConfig {
    /// Show detailed output.
    pub detail: bool,
    /// Output style (e.g. "pretty", "json").
    pub format: String,
    /// Server address as `host:port`.
    pub host: String,
    /// Disable colored output.
    pub no_color: bool,
    /// Credential sent to the server.
    pub token: SecretString,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            detail: false,
            format: String::new(),
            host: String::new(),
            no_color: false,
            token: SecretString::new(String::new().into()),
        }
    }
}

impl CliConfig {
    /// The baseline configuration used when defaults are enabled.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            ..Self::default()
        }
    }
}

impl PartialEq for CliConfig {
    fn eq(&self, other: &Self) -> bool {
        self.detail == other.detail
            && self.format == other.format
            && self.host == other.host
            && self.no_color == other.no_color
            && self.token.expose_secret() == other.token.expose_secret()
    }
}

impl Eq for CliConfig {}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("detail", &self.detail)
            .field("format", &self.format)
            .field("host", &self.host)
            .field("no_color", &self.no_color)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_values() {
        let config = CliConfig::with_defaults();
        assert_eq!(config.host, "localhost:8080");
        assert_eq!(config.format, "pretty");
        assert!(!config.detail);
        assert!(!config.no_color);
        assert!(config.token.expose_secret().is_empty());
    }

    #[test]
    fn test_default_is_zero_valued() {
        let config = CliConfig::default();
        assert!(config.host.is_empty());
        assert!(config.format.is_empty());
        assert!(!config.detail);
        assert!(!config.no_color);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = CliConfig {
            token: SecretString::new("super-secret".into()),
            ..CliConfig::with_defaults()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_equality_compares_token() {
        let a = CliConfig {
            token: SecretString::new("a".into()),
            ..CliConfig::default()
        };
        let b = CliConfig {
            token: SecretString::new("b".into()),
            ..CliConfig::default()
        };
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
