//! Color support detection used to pick an engine's initial `enabled` flag.

/// Where an engine gets its initial `enabled` flag from.
///
/// Resolved exactly once, when the engine is constructed. Changing the
/// environment afterwards has no effect; use
/// [`Colors::set_enabled`](crate::Colors::set_enabled) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSupport {
    /// Enabled unless the `FORCE_COLOR` environment variable is `"0"`.
    #[default]
    Env,
    /// Enabled when the `console` crate reports colors for stdout.
    ///
    /// This honors `CLICOLOR`, `CLICOLOR_FORCE`, `NO_COLOR` and whether
    /// stdout is a terminal.
    Terminal,
    /// Always enabled.
    Always,
    /// Never enabled.
    Never,
}

impl ColorSupport {
    /// Returns whether styling should start out enabled.
    pub fn resolve(self) -> bool {
        match self {
            ColorSupport::Env => force_color_allows(std::env::var("FORCE_COLOR").ok().as_deref()),
            ColorSupport::Terminal => console::colors_enabled(),
            ColorSupport::Always => true,
            ColorSupport::Never => false,
        }
    }
}

fn force_color_allows(value: Option<&str>) -> bool {
    value != Some("0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_color_values() {
        assert!(force_color_allows(None));
        assert!(force_color_allows(Some("1")));
        assert!(force_color_allows(Some("")));
        assert!(!force_color_allows(Some("0")));
    }

    #[test]
    fn test_fixed_support() {
        assert!(ColorSupport::Always.resolve());
        assert!(!ColorSupport::Never.resolve());
    }

    #[test]
    fn test_default_is_env() {
        assert_eq!(ColorSupport::default(), ColorSupport::Env);
    }
}
