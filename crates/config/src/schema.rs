//! Static schema of the CLI configuration.
//!
//! Responsibilities:
//! - Declare every configuration field with its canonical name and value kind.
//! - Enumerate field names in declaration order.
//!
//! Does NOT handle:
//! - Parsing values from files or the environment (see `loader`).
//!
//! Invariants:
//! - `Field::ALL` is the single source of truth for TOML keys and environment
//!   variable suffixes; both are derived from `Field::name()`.
//! - Names are lowercase snake_case and unique.

use std::fmt;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Str,
}

impl FieldKind {
    /// Human readable name used in error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            FieldKind::Bool => "a boolean",
            FieldKind::Str => "a string",
        }
    }
}

/// A recognized configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Detail,
    Format,
    Host,
    NoColor,
    Token,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 5] = [
        Field::Detail,
        Field::Format,
        Field::Host,
        Field::NoColor,
        Field::Token,
    ];

    /// Canonical key used in the config file and as the env var suffix.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Detail => "detail",
            Field::Format => "format",
            Field::Host => "host",
            Field::NoColor => "no_color",
            Field::Token => "token",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Detail | Field::NoColor => FieldKind::Bool,
            Field::Format | Field::Host | Field::Token => FieldKind::Str,
        }
    }

    /// Look up a field by its canonical name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the canonical field names in declaration order.
pub fn field_names() -> Vec<&'static str> {
    Field::ALL.iter().map(|field| field.name()).collect()
}
