//! Theme struct for batching aliases.

use serde::Deserialize;

use crate::style::{AliasTarget, ColorsError};

/// An ordered batch of aliases, installed with [`Colors::theme`](crate::Colors::theme).
///
/// # Example
///
/// ```rust
/// use yanse::{AliasTarget, ColorSupport, Colors, Theme};
///
/// let colors = Colors::new(ColorSupport::Always);
/// let theme = Theme::new()
///     .add("muted", colors.dim())
///     .add("accent", colors.cyan().bold())
///     // Later entries may refer to earlier ones
///     .add("timestamp", "muted")
///     .add("heading", AliasTarget::path("accent.underline"));
///
/// colors.theme(theme).unwrap();
/// assert_eq!(colors.get("heading").unwrap().stack(), &["cyan", "bold", "underline"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    entries: Vec<(String, AliasTarget)>,
}

/// A theme document value: a dotted path or a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeEntry {
    Path(String),
    Names(Vec<String>),
}

impl ThemeEntry {
    fn into_target(self) -> AliasTarget {
        match self {
            ThemeEntry::Path(path) => AliasTarget::path(&path),
            ThemeEntry::Names(names) => AliasTarget::Path(names),
        }
    }
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias entry, returning the updated theme for chaining.
    pub fn add(mut self, name: &str, target: impl Into<AliasTarget>) -> Self {
        self.entries.push((name.to_string(), target.into()));
        self
    }

    /// Loads a theme from a YAML mapping of alias names to styles.
    ///
    /// Each value is either a dotted path (`"bold.red"`) or a list of names
    /// (`[bold, red]`). Entry order is preserved.
    ///
    /// ```rust
    /// use yanse::Theme;
    ///
    /// let theme = Theme::from_yaml("danger: bold.red\nsuccess: [green]\n").unwrap();
    /// assert_eq!(theme.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorsError::ThemeParse`] for malformed YAML and
    /// [`ColorsError::InvalidTheme`] if the document is not a mapping or an
    /// entry is neither a string nor a list of strings.
    pub fn from_yaml(source: &str) -> Result<Self, ColorsError> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| ColorsError::ThemeParse(e.to_string()))?;
        let serde_yaml::Value::Mapping(mapping) = document else {
            return Err(not_a_mapping());
        };

        let mut theme = Theme::new();
        for (key, value) in mapping {
            let name = key.as_str().ok_or_else(|| ColorsError::InvalidTheme {
                reason: format!("alias names must be strings, found {:?}", key),
            })?;
            let entry: ThemeEntry =
                serde_yaml::from_value(value).map_err(|_| invalid_entry(name))?;
            theme = theme.add(name, entry.into_target());
        }
        Ok(theme)
    }

    /// Loads a theme from a JSON object of alias names to styles.
    ///
    /// Accepts the same values as [`from_yaml`](Theme::from_yaml).
    ///
    /// # Errors
    ///
    /// Same as [`from_yaml`](Theme::from_yaml).
    pub fn from_json(source: &str) -> Result<Self, ColorsError> {
        let document: serde_json::Value =
            serde_json::from_str(source).map_err(|e| ColorsError::ThemeParse(e.to_string()))?;
        let serde_json::Value::Object(object) = document else {
            return Err(not_a_mapping());
        };

        let mut theme = Theme::new();
        for (name, value) in object {
            let entry: ThemeEntry =
                serde_json::from_value(value).map_err(|_| invalid_entry(&name))?;
            theme = theme.add(&name, entry.into_target());
        }
        Ok(theme)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in installation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn into_entries(self) -> Vec<(String, AliasTarget)> {
        self.entries
    }
}

fn not_a_mapping() -> ColorsError {
    ColorsError::InvalidTheme {
        reason: "expected a mapping of alias names to styles".to_string(),
    }
}

fn invalid_entry(name: &str) -> ColorsError {
    ColorsError::InvalidTheme {
        reason: format!("style for '{}' must be a dotted path or a list of names", name),
    }
}

impl<K, V> FromIterator<(K, V)> for Theme
where
    K: AsRef<str>,
    V: Into<AliasTarget>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Theme::new(), |theme, (name, target)| theme.add(name.as_ref(), target))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Theme
where
    K: AsRef<str>,
    V: Into<AliasTarget>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Theme
where
    K: AsRef<str>,
    V: Into<AliasTarget>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}
