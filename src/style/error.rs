//! Errors from alias, theme and lookup operations.

use thiserror::Error;

/// Error returned when a style name, alias target or theme cannot be used.
///
/// Styling, detection and stripping never fail; only operations that
/// resolve names supplied at runtime return this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorsError {
    /// An alias points at a name that is not registered.
    #[error("cannot alias '{name}': unknown alias target '{target}'")]
    UnknownAliasTarget { name: String, target: String },

    /// A dynamic accessor was asked for a name that is not registered.
    #[error("unknown style '{name}'")]
    UnknownStyle { name: String },

    /// A dotted style path has an empty segment, e.g. `"bold..red"`.
    #[error("style path '{path}' contains an empty segment")]
    EmptyStylePath { path: String },

    /// A theme document is not a mapping of alias names to styles.
    #[error("invalid theme: {reason}")]
    InvalidTheme { reason: String },

    /// A theme document could not be parsed at all.
    #[error("failed to parse theme: {0}")]
    ThemeParse(String),
}
