//! Named style table owned by one engine.

use std::collections::HashMap;

use super::codec::Codec;
use super::value::{Style, Transform};

/// Style definitions, accessors and categories.
///
/// `styles` maps a name to what is applied when that name sits in a chain's
/// stack. `accessors` maps a name to the stack appended when that name is
/// accessed. For built-ins and [`define`](Registry::define)d styles the two
/// agree (`"bold"` appends `["bold"]`); aliases to other names or chains only
/// get an accessor.
///
/// Not synchronized; [`Colors`](crate::Colors) holds it behind a lock.
#[derive(Debug, Clone, Default)]
pub(crate) struct Registry {
    styles: HashMap<String, Style>,
    accessors: HashMap<String, Vec<String>>,
    /// Accessor names in first-registration order.
    names: Vec<String>,
    categories: Vec<(String, Vec<String>)>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers an SGR style and lists it under `category`.
    ///
    /// Redefining a name replaces its codec; stacks that already hold the
    /// name pick the new codec up on their next apply.
    pub(crate) fn define(&mut self, name: &str, codec: Codec, category: &str) {
        self.styles.insert(name.to_string(), Style::Ansi(codec));
        match self.categories.iter_mut().find(|(key, _)| key == category) {
            Some((_, names)) => names.push(name.to_string()),
            None => self
                .categories
                .push((category.to_string(), vec![name.to_string()])),
        }
        self.set_accessor(name, vec![name.to_string()]);
    }

    /// Registers a custom transform applied in place of an escape codec.
    pub(crate) fn define_transform(&mut self, name: &str, transform: Transform) {
        self.styles
            .insert(name.to_string(), Style::Transform(transform));
        self.set_accessor(name, vec![name.to_string()]);
    }

    /// Sets the stack appended when `name` is accessed.
    pub(crate) fn set_accessor(&mut self, name: &str, stack: Vec<String>) {
        if self.accessors.insert(name.to_string(), stack).is_none() {
            self.names.push(name.to_string());
        }
    }

    pub(crate) fn accessor(&self, name: &str) -> Option<&[String]> {
        self.accessors.get(name).map(Vec::as_slice)
    }

    pub(crate) fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn category(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, names)| names.as_slice())
    }

    pub(crate) fn categories(&self) -> &[(String, Vec<String>)] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_define_installs_style_accessor_and_category() {
        let mut registry = Registry::new();
        registry.define("bold", Codec::new(1, 22), "modifier");

        assert!(registry.style("bold").is_some());
        assert_eq!(registry.accessor("bold"), Some(&["bold".to_string()][..]));
        assert_eq!(registry.category("modifier"), Some(&["bold".to_string()][..]));
    }

    #[test]
    fn test_categories_keep_insertion_order() {
        let mut registry = Registry::new();
        registry.define("red", Codec::new(31, 39), "color");
        registry.define("bold", Codec::new(1, 22), "modifier");
        registry.define("blue", Codec::new(34, 39), "color");

        let keys: Vec<&str> = registry
            .categories()
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(keys, vec!["color", "modifier"]);
        assert_eq!(
            registry.category("color").unwrap(),
            &["red".to_string(), "blue".to_string()]
        );
    }

    #[test]
    fn test_redefine_replaces_codec() {
        let mut registry = Registry::new();
        registry.define("accent", Codec::new(31, 39), "custom");
        registry.define("accent", Codec::new(35, 39), "custom");

        let codec = registry.style("accent").and_then(Style::codec).unwrap();
        assert_eq!(codec.open_code(), 35);
        assert_eq!(registry.names(), &["accent".to_string()]);
    }

    #[test]
    fn test_alias_accessor_has_no_style_entry() {
        let mut registry = Registry::new();
        registry.define("blue", Codec::new(34, 39), "color");
        registry.set_accessor("primary", vec!["blue".to_string()]);

        assert!(registry.style("primary").is_none());
        assert_eq!(registry.accessor("primary"), Some(&["blue".to_string()][..]));
    }

    #[test]
    fn test_transform_entry() {
        let mut registry = Registry::new();
        registry.define_transform("shout", Arc::new(|s: &str| s.to_uppercase()));
        let style = registry.style("shout").unwrap();
        assert_eq!(style.wrap("hi", false), "HI");
    }
}
