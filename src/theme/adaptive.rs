//! Theme pairs chosen by terminal background.

use super::theme::Theme;

/// Whether the terminal background is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Asks the operating system for its appearance setting.
    ///
    /// Anything other than an explicit dark setting counts as light.
    pub fn detect() -> Self {
        dark_light::detect().into()
    }
}

impl From<dark_light::Mode> for ColorMode {
    fn from(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Dark => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }
}

/// A light and a dark [`Theme`] defining the same names.
///
/// [`Colors::adaptive_theme`](crate::Colors::adaptive_theme) installs one of
/// them, picked by a detector the caller passes in.
///
/// # Example
///
/// ```rust
/// use yanse::{AdaptiveTheme, ColorMode, ColorSupport, Colors, Theme};
///
/// let colors = Colors::new(ColorSupport::Always);
/// let light = Theme::new().add("tone", colors.blue());
/// let dark = Theme::new().add("tone", colors.yellow_bright());
///
/// colors.adaptive_theme(&AdaptiveTheme::new(light, dark), || ColorMode::Dark).unwrap();
/// assert_eq!(colors.get("tone").unwrap().apply("x"), "\u{1b}[93mx\u{1b}[39m");
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }

    /// The variant for `mode`.
    pub fn resolve(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}
