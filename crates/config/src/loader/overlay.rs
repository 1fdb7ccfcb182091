//! Typed partial configuration used to layer sources.
//!
//! Each source (file, environment) produces a `PartialConfig` holding only the
//! fields it actually set. Applying overlays in order gives "last non-absent
//! value wins" without an untyped intermediate map.

use secrecy::SecretString;

use crate::schema::Field;
use crate::types::CliConfig;

/// A raw value from one source, convertible to either field kind.
pub(crate) trait RawValue {
    /// The value as a boolean, or None if it cannot be read as one.
    fn into_bool(self) -> Option<bool>;

    /// The value as a string, or None if it cannot be read as one.
    fn into_str(self) -> Option<String>;
}

/// A value already converted to the type of exactly one field.
#[derive(Debug)]
pub(crate) enum Setting {
    Detail(bool),
    Format(String),
    Host(String),
    NoColor(bool),
    Token(SecretString),
}

impl Setting {
    /// Convert `raw` to the type `field` expects. None means the kinds do not match.
    pub(crate) fn parse(field: Field, raw: impl RawValue) -> Option<Self> {
        Some(match field {
            Field::Detail => Self::Detail(raw.into_bool()?),
            Field::Format => Self::Format(raw.into_str()?),
            Field::Host => Self::Host(raw.into_str()?),
            Field::NoColor => Self::NoColor(raw.into_bool()?),
            Field::Token => Self::Token(SecretString::new(raw.into_str()?.into())),
        })
    }
}

/// Configuration values set by a single source.
#[derive(Debug, Clone, Default)]
pub(crate) struct PartialConfig {
    detail: Option<bool>,
    format: Option<String>,
    host: Option<String>,
    no_color: Option<bool>,
    token: Option<SecretString>,
}

impl PartialConfig {
    /// Record `setting`, replacing any earlier value for the same field.
    pub(crate) fn set(&mut self, setting: Setting) {
        match setting {
            Setting::Detail(v) => self.detail = Some(v),
            Setting::Format(v) => self.format = Some(v),
            Setting::Host(v) => self.host = Some(v),
            Setting::NoColor(v) => self.no_color = Some(v),
            Setting::Token(v) => self.token = Some(v),
        }
    }

    /// True when no field was set by this source.
    pub(crate) fn is_empty(&self) -> bool {
        self.detail.is_none()
            && self.format.is_none()
            && self.host.is_none()
            && self.no_color.is_none()
            && self.token.is_none()
    }

    /// Overwrite fields of `config` that this source set.
    pub(crate) fn apply_to(self, config: &mut CliConfig) {
        if let Some(detail) = self.detail {
            config.detail = detail;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(no_color) = self.no_color {
            config.no_color = no_color;
        }
        if let Some(token) = self.token {
            config.token = token;
        }
    }
}
