//! # Yanse - chainable ANSI terminal styles
//!
//! Yanse composes named styles (modifiers, foreground and background colors,
//! bright variants) into chains and applies them to strings, producing
//! correctly nested escape sequences that survive line breaks.
//!
//! ## Quick Start
//!
//! ```rust
//! use yanse::{ColorSupport, Colors};
//!
//! let colors = Colors::new(ColorSupport::Always);
//!
//! let warning = colors.bold().yellow();
//! let text = warning.apply("careful");
//! assert_eq!(text, "\u{1b}[1m\u{1b}[33mcareful\u{1b}[39m\u{1b}[22m");
//!
//! // Strip it again
//! assert_eq!(yanse::unstyle(&text), "careful");
//! ```
//!
//! ## Concepts
//!
//! - [`Colors`]: an engine; a registry of named styles plus the `enabled`
//!   and `visible` flags. [`colors()`] returns the process-wide default,
//!   [`create()`] a fresh independent engine.
//! - [`Chain`]: an ordered, not-yet-applied combination of styles. Every
//!   accessor returns a new chain, so branches never affect each other.
//! - [`Codec`]: the `ESC[<open>m` / `ESC[<close>m` pair of one style.
//!   Wrapping re-opens a style after any inner close that shares its close
//!   code, and re-asserts it after every line break of multi-line input.
//! - Aliases and themes: [`Colors::alias`] binds a new name to a style, a
//!   chain or a custom transform; [`Colors::theme`] installs a batch.
//! - Detection: [`has_ansi`] and [`unstyle`] recognize ANSI sequences from
//!   any source.
//!
//! ## Nesting
//!
//! ```rust
//! use yanse::{ColorSupport, Colors};
//!
//! let colors = Colors::new(ColorSupport::Always);
//! let inner = colors.red().apply("red");
//! let outer = colors.yellow().apply(format!("foo {} bar", inner));
//!
//! // The inner close (39) is followed by a re-open of yellow
//! assert!(outer.contains("\u{1b}[39m\u{1b}[33m bar"));
//! ```
//!
//! ## Flags
//!
//! ```rust
//! use yanse::{ColorSupport, Colors};
//!
//! let colors = Colors::new(ColorSupport::Always);
//! let red = colors.red();
//!
//! colors.set_enabled(false);
//! assert_eq!(red.apply("x"), "x");
//!
//! colors.set_enabled(true);
//! colors.set_visible(false);
//! assert_eq!(red.apply("x"), "");
//! ```

mod apply;
mod chain;
mod colors;
pub mod detect;
pub mod render;
pub mod style;
mod support;
pub mod theme;

use once_cell::sync::Lazy;

pub use chain::Chain;
pub use colors::Colors;
pub use detect::{ansi_regex, has_ansi, has_color, strip_color, unstyle, visible_width};
pub use style::{AliasTarget, BuiltinStyle, Category, Codec, ColorsError, Style, Transform};
pub use support::ColorSupport;
pub use theme::{AdaptiveTheme, ColorMode, Theme};

static DEFAULT: Lazy<Colors> = Lazy::new(|| Colors::new(ColorSupport::default()));

/// The process-wide default engine.
///
/// Created on first use with [`ColorSupport::Env`]. Flags and aliases set on
/// it are visible to every caller of this function.
pub fn colors() -> &'static Colors {
    &DEFAULT
}

/// Creates an independent engine with its own registry and flags.
pub fn create() -> Colors {
    Colors::new(ColorSupport::default())
}
