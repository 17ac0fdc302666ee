//! The styling engine: a style registry plus its `enabled` and `visible` flags.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::chain::Chain;
use crate::detect;
use crate::style::registry::Registry;
use crate::style::{split_path, AliasTarget, BuiltinStyle, Codec, ColorsError, Style};
use crate::support::ColorSupport;
use crate::theme::{AdaptiveTheme, ColorMode, Theme};

/// Reserved transform that strips all ANSI sequences.
pub(crate) const UNSTYLE: &str = "unstyle";
/// Reserved identity transform.
pub(crate) const NOOP: &str = "noop";

/// A styling engine.
///
/// Holds the named styles (built-ins plus anything added with
/// [`define`](Colors::define), [`alias`](Colors::alias) or
/// [`theme`](Colors::theme)) and two flags:
///
/// - `enabled`: when false, styling returns its input unchanged
/// - `visible`: when false, styling returns an empty string
///
/// `Colors` is a handle; clones share the same registry and flags. Flags are
/// read every time a chain is applied, so toggling them affects chains that
/// were built earlier. Use [`Colors::new`] (or [`crate::create`]) for an
/// independent engine.
///
/// # Example
///
/// ```rust
/// use yanse::{ColorSupport, Colors};
///
/// let colors = Colors::new(ColorSupport::Always);
/// assert_eq!(
///     colors.bold().red().apply("hi"),
///     "\u{1b}[1m\u{1b}[31mhi\u{1b}[39m\u{1b}[22m"
/// );
///
/// colors.set_enabled(false);
/// assert_eq!(colors.bold().red().apply("hi"), "hi");
/// ```
#[derive(Clone)]
pub struct Colors {
    shared: Arc<Shared>,
}

struct Shared {
    enabled: AtomicBool,
    visible: AtomicBool,
    registry: RwLock<Registry>,
}

impl Colors {
    /// Creates an engine whose `enabled` flag comes from `support`.
    pub fn new(support: ColorSupport) -> Self {
        Self::with_enabled(support.resolve())
    }

    /// Creates an engine with an explicit initial `enabled` flag.
    pub fn with_enabled(enabled: bool) -> Self {
        let mut registry = Registry::new();
        for style in BuiltinStyle::ALL {
            let (open, close) = style.codes();
            registry.define(style.name(), Codec::new(open, close), style.category().as_str());
        }
        registry.define_transform(UNSTYLE, Arc::new(detect::unstyle));
        registry.define_transform(NOOP, Arc::new(|input: &str| input.to_string()));
        registry.set_accessor("none", vec![NOOP.to_string()]);
        registry.set_accessor("clear", vec![NOOP.to_string()]);

        debug!(enabled, styles = registry.names().len(), "created color engine");

        Self {
            shared: Arc::new(Shared {
                enabled: AtomicBool::new(enabled),
                visible: AtomicBool::new(true),
                registry: RwLock::new(registry),
            }),
        }
    }

    pub fn enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::Relaxed)
    }

    /// Turns styling on or off for every chain of this engine.
    pub fn set_enabled(&self, enabled: bool) {
        debug!(enabled, "setting color engine enabled flag");
        self.shared.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn visible(&self) -> bool {
        self.shared.visible.load(Ordering::Relaxed)
    }

    /// When set to false, every styling call returns an empty string.
    pub fn set_visible(&self, visible: bool) {
        debug!(visible, "setting color engine visible flag");
        self.shared.visible.store(visible, Ordering::Relaxed);
    }

    /// Registers an SGR style under `name`.
    ///
    /// `codes` is the `(open, close)` SGR parameter pair. Redefining an
    /// existing name replaces its escape sequences, including for chains that
    /// were built before the redefinition.
    ///
    /// ```rust
    /// use yanse::{ColorSupport, Colors};
    ///
    /// let colors = Colors::new(ColorSupport::Always);
    /// colors.define("blink", (5, 25), "modifier");
    /// assert_eq!(colors.get("blink").unwrap().apply("!"), "\u{1b}[5m!\u{1b}[25m");
    /// ```
    pub fn define(&self, name: &str, codes: (u16, u16), category: impl AsRef<str>) {
        let (open, close) = codes;
        let category = category.as_ref();
        debug!(name, open, close, category, "defining style");
        self.write().define(name, Codec::new(open, close), category);
    }

    /// Synonym for [`define`](Colors::define).
    pub fn register(&self, name: &str, codes: (u16, u16), category: impl AsRef<str>) {
        self.define(name, codes, category);
    }

    /// Binds `name` to an existing style, a chain, or a custom transform.
    ///
    /// Accessing `name` afterwards appends the target's whole stack, so an
    /// alias of `bold().red()` carries both styles. A transform target is
    /// registered under `name` itself and applied in place of an escape
    /// codec.
    ///
    /// # Errors
    ///
    /// Returns [`ColorsError::UnknownAliasTarget`] if a named target is not
    /// registered, or [`ColorsError::EmptyStylePath`] for a malformed path.
    pub fn alias(&self, name: &str, target: impl Into<AliasTarget>) -> Result<(), ColorsError> {
        let target = target.into();
        let mut registry = self.write();
        match target {
            AliasTarget::Transform(transform) => registry.define_transform(name, transform),
            AliasTarget::Chain(stack) => registry.set_accessor(name, stack),
            AliasTarget::Name(target) => {
                let stack = registry
                    .accessor(&target)
                    .map(<[String]>::to_vec)
                    .ok_or_else(|| ColorsError::UnknownAliasTarget {
                        name: name.to_string(),
                        target,
                    })?;
                registry.set_accessor(name, stack);
            }
            AliasTarget::Path(names) => {
                let stack = resolve_path(&registry, &names).map_err(|err| match err {
                    ColorsError::UnknownStyle { name: target } => ColorsError::UnknownAliasTarget {
                        name: name.to_string(),
                        target,
                    },
                    other => other,
                })?;
                registry.set_accessor(name, stack);
            }
        }
        debug!(name, "installed alias");
        Ok(())
    }

    /// Installs every entry of `theme` as an alias, in order.
    ///
    /// Entries may refer to aliases installed by earlier entries of the same
    /// theme. Installation stops at the first failing entry; entries before
    /// it stay installed.
    ///
    /// ```rust
    /// use yanse::{ColorSupport, Colors};
    ///
    /// let colors = Colors::new(ColorSupport::Always);
    /// colors
    ///     .theme([("danger", colors.red()), ("success", colors.green())])
    ///     .unwrap();
    /// assert!(colors.get("danger").unwrap().apply("x").contains("\u{1b}[31m"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the error of the first entry that cannot be aliased.
    pub fn theme(&self, theme: impl Into<Theme>) -> Result<&Self, ColorsError> {
        let theme = theme.into();
        debug!(entries = theme.len(), "installing theme");
        for (name, target) in theme.into_entries() {
            self.alias(&name, target)?;
        }
        Ok(self)
    }

    /// Installs the light or dark variant of `theme`, whichever `detect`
    /// reports. Pass [`ColorMode::detect`] to follow the OS setting.
    ///
    /// # Errors
    ///
    /// Same as [`theme`](Colors::theme).
    pub fn adaptive_theme<F>(&self, theme: &AdaptiveTheme, detect: F) -> Result<&Self, ColorsError>
    where
        F: FnOnce() -> ColorMode,
    {
        let mode = detect();
        debug!(?mode, "installing adaptive theme");
        self.theme(theme.resolve(mode).clone())
    }

    /// Starts a chain from a registered name, built-in or alias.
    ///
    /// # Errors
    ///
    /// Returns [`ColorsError::UnknownStyle`] if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<Chain, ColorsError> {
        self.root().get(name)
    }

    /// Starts a chain from a dotted path such as `"bold.red.underline"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorsError::UnknownStyle`] for an unregistered segment and
    /// [`ColorsError::EmptyStylePath`] for an empty one.
    pub fn parse(&self, path: &str) -> Result<Chain, ColorsError> {
        self.root().parse(path)
    }

    /// Starts a chain with a built-in style.
    pub fn builtin(&self, style: BuiltinStyle) -> Chain {
        self.root().builtin(style)
    }

    /// Identity chain; applying it returns the input.
    pub fn noop(&self) -> Chain {
        self.root().noop()
    }

    /// Synonym for [`noop`](Colors::noop).
    pub fn none(&self) -> Chain {
        self.root().none()
    }

    /// Synonym for [`noop`](Colors::noop).
    pub fn clear(&self) -> Chain {
        self.root().clear()
    }

    /// Synonym for [`has_ansi`](Colors::has_ansi).
    pub fn has_color(&self, input: &str) -> bool {
        detect::has_color(input)
    }

    /// Returns true if `input` contains any ANSI sequence.
    pub fn has_ansi(&self, input: &str) -> bool {
        detect::has_ansi(input)
    }

    /// Removes all ANSI sequences from `input`, whatever produced them.
    pub fn unstyle(&self, input: &str) -> String {
        detect::unstyle(input)
    }

    /// Synonym for [`unstyle`](Colors::unstyle).
    pub fn strip_color(&self, input: &str) -> String {
        detect::strip_color(input)
    }

    /// Returns true if `name` can be accessed on this engine.
    pub fn has_style(&self, name: &str) -> bool {
        self.read().accessor(name).is_some()
    }

    /// All accessible names, built-ins first, in registration order.
    pub fn style_names(&self) -> Vec<String> {
        self.read().names().to_vec()
    }

    /// Names listed under `category` (`"modifier"`, `"color"`, `"bg"`,
    /// `"bright"`, `"bgBright"`, or a custom category).
    pub fn category(&self, category: impl AsRef<str>) -> Vec<String> {
        self.read()
            .category(category.as_ref())
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    /// Every category with its names, in first-registration order.
    pub fn categories(&self) -> Vec<(String, Vec<String>)> {
        self.read().categories().to_vec()
    }

    /// The escape codec registered under `name`, if it is an SGR style.
    pub fn codec(&self, name: &str) -> Option<Codec> {
        self.read().style(name).and_then(Style::codec).cloned()
    }

    pub(crate) fn root(&self) -> Chain {
        Chain::new(self.clone(), Vec::new())
    }

    pub(crate) fn accessor(&self, name: &str) -> Option<Vec<String>> {
        self.read().accessor(name).map(<[String]>::to_vec)
    }

    pub(crate) fn resolve_path(&self, names: &[String]) -> Result<Vec<String>, ColorsError> {
        resolve_path(&self.read(), names)
    }

    /// Current registry entries for `names`, looked up by name.
    pub(crate) fn lookup(&self, names: &[String]) -> Vec<Option<Style>> {
        let registry = self.read();
        names.iter().map(|name| registry.style(name).cloned()).collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.shared
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.shared
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new(ColorSupport::default())
    }
}

impl fmt::Debug for Colors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colors")
            .field("enabled", &self.enabled())
            .field("visible", &self.visible())
            .field("styles", &self.read().names().len())
            .finish()
    }
}

/// Concatenates the accessor stacks of `names`.
fn resolve_path(registry: &Registry, names: &[String]) -> Result<Vec<String>, ColorsError> {
    let mut stack = Vec::new();
    for name in names {
        if name.is_empty() {
            return Err(ColorsError::EmptyStylePath {
                path: names.join("."),
            });
        }
        let tail = registry
            .accessor(name)
            .ok_or_else(|| ColorsError::UnknownStyle { name: name.clone() })?;
        stack.extend_from_slice(tail);
    }
    Ok(stack)
}

pub(crate) fn parse_path(colors: &Colors, path: &str) -> Result<Vec<String>, ColorsError> {
    colors.resolve_path(&split_path(path))
}
