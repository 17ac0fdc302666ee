//! Themes: batches of aliases installed together.
//!
//! - [`Theme`]: an ordered collection of alias entries with a builder API
//!   and YAML/JSON loaders
//! - [`AdaptiveTheme`]: light/dark theme pairs
//! - [`ColorMode`]: light or dark color mode

mod adaptive;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{AdaptiveTheme, ColorMode};
pub use theme::Theme;
