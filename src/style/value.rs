//! Registry entries and alias targets.

use std::fmt;
use std::sync::Arc;

use super::codec::Codec;
use crate::chain::Chain;

/// A custom string transform registered through [`Colors::alias`](crate::Colors::alias).
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// What the registry stores under a style name.
#[derive(Clone)]
pub enum Style {
    /// An SGR style wrapped with escape sequences.
    Ansi(Codec),
    /// A custom transform applied as-is, bypassing the escape codec.
    Transform(Transform),
}

impl Style {
    /// Applies this style to `input`.
    ///
    /// `multiline` only affects escape codecs; transforms get the raw text.
    pub fn wrap(&self, input: &str, multiline: bool) -> String {
        match self {
            Style::Ansi(codec) => codec.wrap(input, multiline),
            Style::Transform(transform) => transform(input),
        }
    }

    pub fn codec(&self) -> Option<&Codec> {
        match self {
            Style::Ansi(codec) => Some(codec),
            Style::Transform(_) => None,
        }
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Ansi(codec) => f.debug_tuple("Ansi").field(codec).finish(),
            Style::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Something a new style name can be bound to.
///
/// Built from a registered name (`"blue"`), a dotted path of names
/// (`AliasTarget::path("bold.red")`), an existing chain, or an arbitrary
/// string transform.
///
/// # Example
///
/// ```rust
/// use yanse::{AliasTarget, ColorSupport, Colors};
///
/// let colors = Colors::new(ColorSupport::Always);
/// colors.alias("primary", "blue").unwrap();
/// colors.alias("warning", colors.bold().yellow()).unwrap();
/// colors.alias("heading", AliasTarget::path("bold.underline")).unwrap();
/// colors.alias("shout", AliasTarget::transform(|s| s.to_uppercase())).unwrap();
///
/// assert_eq!(colors.get("shout").unwrap().apply("hey"), "HEY");
/// ```
#[derive(Clone)]
pub enum AliasTarget {
    /// A single registered name; the alias appends whatever that name appends.
    Name(String),
    /// Registered names accessed one after another.
    Path(Vec<String>),
    /// The stack of an existing chain.
    Chain(Vec<String>),
    /// A custom transform registered under the alias name.
    Transform(Transform),
}

impl AliasTarget {
    /// Wraps a closure as a custom transform target.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        AliasTarget::Transform(Arc::new(f))
    }

    /// Splits a dotted path such as `"bold.red"` into its names.
    pub fn path(path: &str) -> Self {
        AliasTarget::Path(split_path(path))
    }
}

pub(crate) fn split_path(path: &str) -> Vec<String> {
    path.split('.').map(|segment| segment.trim().to_string()).collect()
}

impl fmt::Debug for AliasTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasTarget::Name(name) => f.debug_tuple("Name").field(name).finish(),
            AliasTarget::Path(names) => f.debug_tuple("Path").field(names).finish(),
            AliasTarget::Chain(stack) => f.debug_tuple("Chain").field(stack).finish(),
            AliasTarget::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl From<&str> for AliasTarget {
    fn from(name: &str) -> Self {
        AliasTarget::Name(name.to_string())
    }
}

impl From<String> for AliasTarget {
    fn from(name: String) -> Self {
        AliasTarget::Name(name)
    }
}

impl From<Chain> for AliasTarget {
    fn from(chain: Chain) -> Self {
        AliasTarget::Chain(chain.stack().to_vec())
    }
}

impl From<&Chain> for AliasTarget {
    fn from(chain: &Chain) -> Self {
        AliasTarget::Chain(chain.stack().to_vec())
    }
}

impl From<Transform> for AliasTarget {
    fn from(transform: Transform) -> Self {
        AliasTarget::Transform(transform)
    }
}
