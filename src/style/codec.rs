//! Escape codec: SGR open/close sequences and the wrap algorithm.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A line break, including any carriage returns in front of it.
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r*\n").expect("newline pattern is valid"));

/// Open/close escape sequences for one SGR style.
///
/// The sequences are computed once, at registration time.
///
/// # Example
///
/// ```rust
/// use yanse::Codec;
///
/// let red = Codec::new(31, 39);
/// assert_eq!(red.open(), "\u{1b}[31m");
/// assert_eq!(red.wrap("hi", false), "\u{1b}[31mhi\u{1b}[39m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    open_code: u16,
    close_code: u16,
    open: String,
    close: String,
    reopen: String,
}

impl Codec {
    /// Builds the codec for the given SGR parameters.
    pub fn new(open_code: u16, close_code: u16) -> Self {
        let open = format!("\x1b[{}m", open_code);
        let close = format!("\x1b[{}m", close_code);
        let reopen = format!("{}{}", close, open);
        Self {
            open_code,
            close_code,
            open,
            close,
            reopen,
        }
    }

    /// The SGR parameter that turns the style on.
    pub fn open_code(&self) -> u16 {
        self.open_code
    }

    /// The SGR parameter that turns the style off.
    pub fn close_code(&self) -> u16 {
        self.close_code
    }

    /// The `ESC[<open>m` sequence.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The `ESC[<close>m` sequence.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Returns true if `input` already contains this style's close sequence.
    ///
    /// Several styles share a close code (every foreground color resets with
    /// 39), so this also fires for text styled by a sibling style.
    pub fn collides(&self, input: &str) -> bool {
        input.contains(&self.close)
    }

    /// Wraps `input` in this style.
    ///
    /// Any close sequence already inside `input` is followed by a re-open, so
    /// an inner style sharing the close code does not end the outer style
    /// early. With `multiline` set, the style is closed before and re-opened
    /// after every line break.
    pub fn wrap(&self, input: &str, multiline: bool) -> String {
        let patched: Cow<'_, str> = if self.collides(input) {
            Cow::Owned(input.replace(&self.close, &self.reopen))
        } else {
            Cow::Borrowed(input)
        };

        let mut output = String::with_capacity(self.open.len() + patched.len() + self.close.len());
        output.push_str(&self.open);
        output.push_str(&patched);
        output.push_str(&self.close);

        if multiline {
            NEWLINE
                .replace_all(&output, |caps: &Captures<'_>| {
                    format!("{}{}{}", self.close, &caps[0], self.open)
                })
                .into_owned()
        } else {
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences() {
        let bold = Codec::new(1, 22);
        assert_eq!(bold.open(), "\x1b[1m");
        assert_eq!(bold.close(), "\x1b[22m");
        assert_eq!(bold.open_code(), 1);
        assert_eq!(bold.close_code(), 22);
    }

    #[test]
    fn test_wrap_plain() {
        let red = Codec::new(31, 39);
        assert_eq!(red.wrap("Hello", false), "\x1b[31mHello\x1b[39m");
    }

    #[test]
    fn test_wrap_reopens_after_inner_close() {
        let yellow = Codec::new(33, 39);
        let inner = "a \x1b[31mred\x1b[39m b";
        assert!(yellow.collides(inner));
        assert_eq!(
            yellow.wrap(inner, false),
            "\x1b[33ma \x1b[31mred\x1b[39m\x1b[33m b\x1b[39m"
        );
    }

    #[test]
    fn test_wrap_multiline() {
        let green = Codec::new(32, 39);
        assert_eq!(
            green.wrap("Line 1\nLine 2", true),
            "\x1b[32mLine 1\x1b[39m\n\x1b[32mLine 2\x1b[39m"
        );
    }

    #[test]
    fn test_wrap_multiline_keeps_carriage_returns() {
        let green = Codec::new(32, 39);
        assert_eq!(
            green.wrap("a\r\nb", true),
            "\x1b[32ma\x1b[39m\r\n\x1b[32mb\x1b[39m"
        );
    }

    #[test]
    fn test_wrap_single_line_flag_ignores_newlines() {
        let green = Codec::new(32, 39);
        assert_eq!(green.wrap("a\nb", false), "\x1b[32ma\nb\x1b[39m");
    }
}
