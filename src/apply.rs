//! Runs a style stack over a string.

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::{trace, warn};

use crate::colors::{Colors, UNSTYLE};

/// Applies `stack` to `input` through `colors`.
///
/// Styles are looked up by name at call time and applied from the last stack
/// entry to the first, so the first entry ends up outermost. Names with no
/// registry entry leave the text unchanged for their step.
pub(crate) fn apply(colors: &Colors, stack: &[String], input: Option<&str>) -> String {
    let input = match input {
        None | Some("") => return String::new(),
        Some(input) => input,
    };
    if !colors.enabled() {
        return input.to_string();
    }
    if !colors.visible() {
        return String::new();
    }

    let multiline = input.contains('\n');
    let order = effective_order(stack);
    let styles = colors.lookup(&order);

    let mut output = input.to_string();
    for (name, style) in order.iter().zip(styles).rev() {
        output = match style {
            Some(style) => style.wrap(&output, multiline),
            None => {
                warn!(style = %name, "no style registered under this name, passing text through");
                output
            }
        };
    }

    trace!(stack = ?order, multiline, "applied style chain");
    output
}

/// Moves `unstyle` so it runs before every other style.
///
/// A stack containing `unstyle` is rewritten as the first-seen-order set of
/// `["unstyle", ..stack]`, reversed. Applied back to front, the strip then
/// sees the raw text and the remaining styles wrap its result.
fn effective_order(stack: &[String]) -> Cow<'_, [String]> {
    if !stack.iter().any(|name| name == UNSTYLE) {
        return Cow::Borrowed(stack);
    }

    let mut seen = HashSet::new();
    let mut order: Vec<String> = std::iter::once(UNSTYLE)
        .chain(stack.iter().map(String::as_str))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect();
    order.reverse();
    Cow::Owned(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorSupport;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_effective_order_without_unstyle() {
        let stack = names(&["bold", "red"]);
        assert!(matches!(effective_order(&stack), Cow::Borrowed(_)));
    }

    #[test]
    fn test_effective_order_moves_unstyle_last() {
        let stack = names(&["unstyle", "bold", "red"]);
        assert_eq!(&*effective_order(&stack), names(&["red", "bold", "unstyle"]).as_slice());

        let stack = names(&["bold", "unstyle", "red"]);
        assert_eq!(&*effective_order(&stack), names(&["red", "bold", "unstyle"]).as_slice());
    }

    #[test]
    fn test_effective_order_dedupes() {
        let stack = names(&["red", "unstyle", "red", "unstyle"]);
        assert_eq!(&*effective_order(&stack), names(&["red", "unstyle"]).as_slice());
    }

    #[test]
    fn test_apply_order_first_is_outermost() {
        let colors = Colors::new(ColorSupport::Always);
        let output = apply(&colors, &names(&["bold", "red"]), Some("x"));
        assert_eq!(output, "\x1b[1m\x1b[31mx\x1b[39m\x1b[22m");
    }

    #[test]
    fn test_apply_empty_and_absent() {
        let colors = Colors::new(ColorSupport::Always);
        let stack = names(&["red"]);
        assert_eq!(apply(&colors, &stack, Some("")), "");
        assert_eq!(apply(&colors, &stack, None), "");

        colors.set_enabled(false);
        assert_eq!(apply(&colors, &stack, Some("")), "");
    }

    #[test]
    fn test_apply_unknown_name_passes_through() {
        let colors = Colors::new(ColorSupport::Always);
        let output = apply(&colors, &names(&["mystery", "red"]), Some("x"));
        assert_eq!(output, "\x1b[31mx\x1b[39m");
    }

    #[test]
    fn test_apply_unstyle_scrubs_before_wrapping() {
        let colors = Colors::new(ColorSupport::Always);
        let input = "\x1b[32mgreen\x1b[39m";
        let output = apply(&colors, &names(&["red", "unstyle"]), Some(input));
        assert_eq!(output, "\x1b[31mgreen\x1b[39m");

        let output = apply(&colors, &names(&["unstyle", "red"]), Some(input));
        assert_eq!(output, "\x1b[31mgreen\x1b[39m");
    }

    #[test]
    fn test_apply_empty_stack_returns_input() {
        let colors = Colors::new(ColorSupport::Always);
        assert_eq!(apply(&colors, &[], Some("x")), "x");
    }
}
