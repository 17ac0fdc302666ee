//! Chain builder: ordered, not-yet-applied style combinations.

use std::fmt;

use crate::apply;
use crate::colors::{parse_path, Colors};
use crate::style::builtin::for_each_builtin;
use crate::style::{BuiltinStyle, ColorsError};

/// An ordered combination of styles bound to one engine.
///
/// Every accessor returns a new chain with the accessed style appended; the
/// receiver is never modified, so chains branching from a shared prefix are
/// independent. [`apply`](Chain::apply) runs the combination on a string.
///
/// The first style in the stack ends up outermost in the output.
///
/// # Example
///
/// ```rust
/// use yanse::{ColorSupport, Colors};
///
/// let colors = Colors::new(ColorSupport::Always);
/// let bold = colors.bold();
/// let bold_red = bold.red();
/// let bold_underline = bold.underline();
///
/// assert_eq!(bold.stack(), &["bold"]);
/// assert_eq!(bold_red.stack(), &["bold", "red"]);
/// assert_eq!(bold_underline.stack(), &["bold", "underline"]);
/// ```
#[derive(Clone)]
pub struct Chain {
    colors: Colors,
    stack: Vec<String>,
}

impl Chain {
    pub(crate) fn new(colors: Colors, stack: Vec<String>) -> Self {
        Self { colors, stack }
    }

    /// Style names in this chain, outermost first.
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// The engine this chain applies through.
    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    /// Appends the style or alias registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorsError::UnknownStyle`] if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<Chain, ColorsError> {
        let tail = self
            .colors
            .accessor(name)
            .ok_or_else(|| ColorsError::UnknownStyle {
                name: name.to_string(),
            })?;
        Ok(self.extended(&tail))
    }

    /// Appends every name of a dotted path such as `"bold.red"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorsError::UnknownStyle`] for an unregistered segment and
    /// [`ColorsError::EmptyStylePath`] for an empty one.
    pub fn parse(&self, path: &str) -> Result<Chain, ColorsError> {
        let tail = parse_path(&self.colors, path)?;
        Ok(self.extended(&tail))
    }

    /// Appends a built-in style.
    ///
    /// If the built-in's name was re-aliased, the alias is appended instead.
    pub fn builtin(&self, style: BuiltinStyle) -> Chain {
        self.known(style.name())
    }

    /// Appends the identity transform.
    pub fn noop(&self) -> Chain {
        self.known("noop")
    }

    pub fn none(&self) -> Chain {
        self.known("none")
    }

    pub fn clear(&self) -> Chain {
        self.known("clear")
    }

    /// Applies this chain to `input`.
    ///
    /// Empty input gives an empty string. Otherwise the result depends on the
    /// engine's flags at the time of the call: disabled engines return the
    /// input unchanged and invisible engines return an empty string.
    pub fn apply(&self, input: impl AsRef<str>) -> String {
        apply::apply(&self.colors, &self.stack, Some(input.as_ref()))
    }

    /// Like [`apply`](Chain::apply), with `None` standing for absent input.
    pub fn apply_opt(&self, input: Option<&str>) -> String {
        apply::apply(&self.colors, &self.stack, input)
    }

    /// Turns this chain into a plain closure.
    pub fn to_fn(&self) -> impl Fn(&str) -> String + Send + Sync + 'static {
        let chain = self.clone();
        move |input: &str| chain.apply(input)
    }

    /// Appends a name that is registered at construction.
    fn known(&self, name: &str) -> Chain {
        let tail = self
            .colors
            .accessor(name)
            .unwrap_or_else(|| vec![name.to_string()]);
        self.extended(&tail)
    }

    fn extended(&self, tail: &[String]) -> Chain {
        let mut stack = Vec::with_capacity(self.stack.len() + tail.len());
        stack.extend_from_slice(&self.stack);
        stack.extend_from_slice(tail);
        Chain::new(self.colors.clone(), stack)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("stack", &self.stack).finish()
    }
}

macro_rules! builtin_accessors {
    ($(($variant:ident, $method:ident, $name:literal, $open:literal, $close:literal, $category:ident)),* $(,)?) => {
        /// One accessor per built-in style.
        impl Colors {
            $(
                #[doc = concat!("Starts a chain with `", $name, "`.")]
                pub fn $method(&self) -> Chain {
                    self.builtin(BuiltinStyle::$variant)
                }
            )*
        }

        /// One accessor per built-in style.
        impl Chain {
            $(
                #[doc = concat!("Appends `", $name, "` to this chain.")]
                pub fn $method(&self) -> Chain {
                    self.builtin(BuiltinStyle::$variant)
                }
            )*
        }
    };
}

for_each_builtin!(builtin_accessors);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorSupport;

    fn colors() -> Colors {
        Colors::new(ColorSupport::Always)
    }

    #[test]
    fn test_accessors_append() {
        let colors = colors();
        let chain = colors.bold().red().underline();
        assert_eq!(chain.stack(), &["bold", "red", "underline"]);
    }

    #[test]
    fn test_branching_does_not_share_extensions() {
        let colors = colors();
        let base = colors.bold();
        let red = base.red();
        let blue = base.blue();

        assert_eq!(base.stack(), &["bold"]);
        assert_eq!(red.stack(), &["bold", "red"]);
        assert_eq!(blue.stack(), &["bold", "blue"]);
    }

    #[test]
    fn test_duplicates_permitted() {
        let colors = colors();
        assert_eq!(colors.red().red().stack(), &["red", "red"]);
    }

    #[test]
    fn test_bright_and_background_method_names() {
        let colors = colors();
        assert_eq!(colors.red_bright().stack(), &["redBright"]);
        assert_eq!(colors.bg_green_bright().stack(), &["bgGreenBright"]);
        assert_eq!(colors.bg_blue().stack(), &["bgBlue"]);
        assert_eq!(colors.grey().stack(), &["grey"]);
    }

    #[test]
    fn test_get_dynamic_name() {
        let colors = colors();
        colors.alias("primary", colors.bold().blue()).unwrap();
        let chain = colors.underline().get("primary").unwrap();
        assert_eq!(chain.stack(), &["underline", "bold", "blue"]);
    }

    #[test]
    fn test_get_unknown_name() {
        let colors = colors();
        assert_eq!(
            colors.bold().get("purple").unwrap_err(),
            ColorsError::UnknownStyle {
                name: "purple".to_string()
            }
        );
    }

    #[test]
    fn test_parse_extends_chain() {
        let colors = colors();
        let chain = colors.bold().parse("red.bgWhite").unwrap();
        assert_eq!(chain.stack(), &["bold", "red", "bgWhite"]);
    }

    #[test]
    fn test_noop_synonyms() {
        let colors = colors();
        assert_eq!(colors.noop().stack(), &["noop"]);
        assert_eq!(colors.none().stack(), &["noop"]);
        assert_eq!(colors.clear().stack(), &["noop"]);
        assert_eq!(colors.noop().apply("text"), "text");
    }

    #[test]
    fn test_realiased_builtin_accessor() {
        let colors = colors();
        colors.alias("bold", colors.bold().red()).unwrap();
        assert_eq!(colors.bold().stack(), &["bold", "red"]);
    }

    #[test]
    fn test_to_fn() {
        let colors = colors();
        let red = colors.red().to_fn();
        assert_eq!(red("x"), "\x1b[31mx\x1b[39m");
    }

    #[test]
    fn test_debug_shows_stack() {
        let colors = colors();
        assert_eq!(format!("{:?}", colors.bold().red()), r#"Chain { stack: ["bold", "red"] }"#);
    }
}
