//! ANSI detection and stripping.
//!
//! These functions recognize ANSI control sequences in general, not only the
//! ones this crate emits, so they work on output from any tool.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Pattern source for [`ansi_regex`].
///
/// Matches an ESC or single-byte CSI introducer, optional private-mode
/// markers, then either a BEL-terminated string or numeric parameters
/// followed by a final byte.
pub const ANSI_PATTERN: &str = concat!(
    r"[\x1b\x{9b}][\[\]#;?()]*",
    r"(?:",
    r"(?:[A-Za-z0-9]*;?[A-Za-z0-9]*)\x07",
    r"|",
    r"(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[~0-9=<>cf-nqrtyA-PRZ]",
    r")",
);

static ANSI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(ANSI_PATTERN).expect("ANSI pattern is valid"));

/// [`ANSI_PATTERN`] plus any lone introducer, so one pass leaves no
/// introducer behind.
static STRIP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?:{})|[\x1b\x{{9b}}]", ANSI_PATTERN)).expect("strip pattern is valid")
});

/// The compiled ANSI matcher.
///
/// `Regex` keeps no search position between calls, so it can be shared
/// freely.
pub fn ansi_regex() -> &'static Regex {
    &ANSI_REGEX
}

/// Returns true if `input` is non-empty and contains any ANSI sequence.
///
/// # Example
///
/// ```rust
/// assert!(yanse::has_ansi("\u{1b}[31mred\u{1b}[39m"));
/// assert!(!yanse::has_ansi("plain"));
/// ```
pub fn has_ansi(input: &str) -> bool {
    !input.is_empty() && ANSI_REGEX.is_match(input)
}

/// Synonym for [`has_ansi`].
pub fn has_color(input: &str) -> bool {
    has_ansi(input)
}

/// Removes every ANSI sequence from `input`.
///
/// Introducers that do not start a complete sequence are dropped too, so
/// the result contains no ESC or CSI character and stripping it again is a
/// no-op. Text following a dropped introducer is kept.
///
/// A BEL-terminated string sequence swallows the letters and digits in front
/// of the BEL, so `"\u{1b}[31mabc\u{7}"` strips to `""`.
///
/// # Example
///
/// ```rust
/// assert_eq!(yanse::unstyle("\u{1b}[1m\u{1b}[31mhi\u{1b}[39m\u{1b}[22m"), "hi");
/// ```
pub fn unstyle(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    STRIP_REGEX.replace_all(input, "").into_owned()
}

/// Synonym for [`unstyle`].
pub fn strip_color(input: &str) -> String {
    unstyle(input)
}

/// Display width of `input` in terminal columns, ignoring ANSI sequences.
///
/// ```rust
/// assert_eq!(yanse::visible_width("\u{1b}[1m日本\u{1b}[22m"), 4);
/// ```
pub fn visible_width(input: &str) -> usize {
    unstyle(input).width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_has_ansi_sgr() {
        assert!(has_ansi("\x1b[31mHello\x1b[39m"));
        assert!(has_ansi("pre \x1b[0m post"));
    }

    #[test]
    fn test_has_ansi_plain_and_empty() {
        assert!(!has_ansi("plain"));
        assert!(!has_ansi(""));
        assert!(!has_color("[31m not an escape"));
    }

    #[test]
    fn test_has_ansi_single_byte_csi() {
        assert!(has_ansi("\u{9b}31mred"));
    }

    #[test]
    fn test_has_ansi_repeated_calls_are_independent() {
        let styled = "\x1b[1mx\x1b[22m";
        for _ in 0..3 {
            assert!(has_ansi(styled));
            assert!(!has_ansi("x"));
        }
    }

    #[test]
    fn test_unstyle_sgr() {
        assert_eq!(unstyle("\x1b[1m\x1b[31mStyled Text\x1b[39m\x1b[22m"), "Styled Text");
        assert_eq!(strip_color("\x1b[38;5;196mred\x1b[0m"), "red");
    }

    #[test]
    fn test_unstyle_non_sgr_sequences() {
        assert_eq!(unstyle("\x1b[2J\x1b[Hhome"), "home");
        assert_eq!(unstyle("\x1b[?25lhidden\x1b[?25h"), "hidden");
    }

    #[test]
    fn test_unstyle_bel_terminated() {
        assert_eq!(unstyle("\x1b]0;title\x07text"), "text");
    }

    #[test]
    fn test_unstyle_empty() {
        assert_eq!(unstyle(""), "");
    }

    #[test]
    fn test_unstyle_drops_lone_introducers() {
        let input = "\x1b\x1b[31m[1mtext\u{9b}";
        let once = unstyle(input);
        assert_eq!(once, "[1mtext");
        assert_eq!(unstyle(&once), once);
    }

    #[test]
    fn test_unstyle_is_linear_in_orphan_introducers() {
        let count = 100_000;
        let input = format!("{}{}", "\x1b".repeat(count), "[1m".repeat(count));

        let started = Instant::now();
        let stripped = unstyle(&input);
        let elapsed = started.elapsed();

        assert!(!stripped.contains('\x1b'));
        assert!(!stripped.contains('\u{9b}'));
        // The last ESC still forms a sequence with the first "[1m".
        assert_eq!(stripped, "[1m".repeat(count - 1));
        assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);
    }

    #[test]
    fn test_unstyle_bel_swallows_styled_text() {
        assert_eq!(unstyle("\x1b[31mabc\x07\x1b[39m"), "");
        assert_eq!(unstyle("\x1b[31mabc def\x07\x1b[39m"), "abc def\x07");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width("\x1b[31mHello\x1b[39m"), 5);
        assert_eq!(visible_width(""), 0);
    }
}
