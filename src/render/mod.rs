//! Template integration.
//!
//! Exposes chains to [minijinja] templates as a `style` filter, so styling
//! can live in templates instead of code:
//!
//! ```rust
//! use yanse::{render::render, ColorSupport, Colors};
//!
//! let colors = Colors::new(ColorSupport::Always);
//! let out = render(r#"{{ name | style("bold.red") }}"#, &serde_json::json!({"name": "x"}), &colors).unwrap();
//! assert_eq!(out, "\u{1b}[1m\u{1b}[31mx\u{1b}[39m\u{1b}[22m");
//! ```

mod filters;

pub use filters::register_filters;

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::colors::Colors;

/// Renders a one-off template with the styling filters registered.
///
/// # Errors
///
/// Returns a minijinja error for invalid templates, or when a `style`
/// filter names an unknown style.
pub fn render<S: Serialize>(template: &str, data: &S, colors: &Colors) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, colors.clone());
    env.render_str(template, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorSupport;
    use serde_json::json;

    #[test]
    fn test_style_filter_applies_chain() {
        let colors = Colors::new(ColorSupport::Always);
        let out = render(r#"{{ msg | style("green") }}"#, &json!({"msg": "ok"}), &colors).unwrap();
        assert_eq!(out, "\x1b[32mok\x1b[39m");
    }

    #[test]
    fn test_style_filter_uses_aliases() {
        let colors = Colors::new(ColorSupport::Always);
        colors.alias("danger", colors.bold().red()).unwrap();
        let out = render(r#"{{ "boom" | style("danger") }}"#, &json!({}), &colors).unwrap();
        assert_eq!(out, "\x1b[1m\x1b[31mboom\x1b[39m\x1b[22m");
    }

    #[test]
    fn test_style_filter_unknown_style() {
        let colors = Colors::new(ColorSupport::Always);
        let err = render(r#"{{ "x" | style("purple") }}"#, &json!({}), &colors).unwrap_err();
        assert!(err.to_string().contains("purple"));
    }

    #[test]
    fn test_style_filter_absent_value() {
        let colors = Colors::new(ColorSupport::Always);
        let out = render(r#"[{{ missing | style("red") }}]"#, &json!({}), &colors).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_style_filter_respects_enabled() {
        let colors = Colors::new(ColorSupport::Never);
        let out = render(r#"{{ "plain" | style("red") }}"#, &json!({}), &colors).unwrap();
        assert_eq!(out, "plain");
    }

    #[test]
    fn test_unstyle_filter() {
        let colors = Colors::new(ColorSupport::Always);
        let styled = colors.red().apply("hi");
        let out = render("{{ s | unstyle }}", &json!({"s": styled}), &colors).unwrap();
        assert_eq!(out, "hi");
    }
}
