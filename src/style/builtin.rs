//! The closed set of built-in styles.
//!
//! Every built-in is listed once, in [`for_each_builtin!`], together with its
//! escape name, SGR open/close codes, category and the accessor method name
//! generated for it on [`Colors`](crate::Colors) and [`Chain`](crate::Chain).

/// Invokes `$callback!` with the full built-in style table.
///
/// Each row is `(Variant, accessor_method, "escapeName", open, close, Category)`.
macro_rules! for_each_builtin {
    ($callback:ident) => {
        $callback! {
            (Reset, reset, "reset", 0, 0, Modifier),
            (Bold, bold, "bold", 1, 22, Modifier),
            (Dim, dim, "dim", 2, 22, Modifier),
            (Italic, italic, "italic", 3, 23, Modifier),
            (Underline, underline, "underline", 4, 24, Modifier),
            (Inverse, inverse, "inverse", 7, 27, Modifier),
            (Hidden, hidden, "hidden", 8, 28, Modifier),
            (Strikethrough, strikethrough, "strikethrough", 9, 29, Modifier),

            (Black, black, "black", 30, 39, Color),
            (Red, red, "red", 31, 39, Color),
            (Green, green, "green", 32, 39, Color),
            (Yellow, yellow, "yellow", 33, 39, Color),
            (Blue, blue, "blue", 34, 39, Color),
            (Magenta, magenta, "magenta", 35, 39, Color),
            (Cyan, cyan, "cyan", 36, 39, Color),
            (White, white, "white", 37, 39, Color),
            (Gray, gray, "gray", 90, 39, Color),
            (Grey, grey, "grey", 90, 39, Color),

            (BgBlack, bg_black, "bgBlack", 40, 49, Bg),
            (BgRed, bg_red, "bgRed", 41, 49, Bg),
            (BgGreen, bg_green, "bgGreen", 42, 49, Bg),
            (BgYellow, bg_yellow, "bgYellow", 43, 49, Bg),
            (BgBlue, bg_blue, "bgBlue", 44, 49, Bg),
            (BgMagenta, bg_magenta, "bgMagenta", 45, 49, Bg),
            (BgCyan, bg_cyan, "bgCyan", 46, 49, Bg),
            (BgWhite, bg_white, "bgWhite", 47, 49, Bg),

            (BlackBright, black_bright, "blackBright", 90, 39, Bright),
            (RedBright, red_bright, "redBright", 91, 39, Bright),
            (GreenBright, green_bright, "greenBright", 92, 39, Bright),
            (YellowBright, yellow_bright, "yellowBright", 93, 39, Bright),
            (BlueBright, blue_bright, "blueBright", 94, 39, Bright),
            (MagentaBright, magenta_bright, "magentaBright", 95, 39, Bright),
            (CyanBright, cyan_bright, "cyanBright", 96, 39, Bright),
            (WhiteBright, white_bright, "whiteBright", 97, 39, Bright),

            (BgBlackBright, bg_black_bright, "bgBlackBright", 100, 49, BgBright),
            (BgRedBright, bg_red_bright, "bgRedBright", 101, 49, BgBright),
            (BgGreenBright, bg_green_bright, "bgGreenBright", 102, 49, BgBright),
            (BgYellowBright, bg_yellow_bright, "bgYellowBright", 103, 49, BgBright),
            (BgBlueBright, bg_blue_bright, "bgBlueBright", 104, 49, BgBright),
            (BgMagentaBright, bg_magenta_bright, "bgMagentaBright", 105, 49, BgBright),
            (BgCyanBright, bg_cyan_bright, "bgCyanBright", 106, 49, BgBright),
            (BgWhiteBright, bg_white_bright, "bgWhiteBright", 107, 49, BgBright),
        }
    };
}

pub(crate) use for_each_builtin;

/// Introspection group a style is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Text attributes: bold, dim, italic, ...
    Modifier,
    /// Standard foreground colors.
    Color,
    /// Standard background colors.
    Bg,
    /// Bright foreground colors.
    Bright,
    /// Bright background colors.
    BgBright,
}

impl Category {
    /// Returns the category key used by the registry.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Modifier => "modifier",
            Category::Color => "color",
            Category::Bg => "bg",
            Category::Bright => "bright",
            Category::BgBright => "bgBright",
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

macro_rules! define_builtin_enum {
    ($(($variant:ident, $method:ident, $name:literal, $open:literal, $close:literal, $category:ident)),* $(,)?) => {
        /// A style that every engine registers at construction.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BuiltinStyle {
            $(
                #[doc = concat!("`", $name, "` (SGR ", stringify!($open), "/", stringify!($close), ")")]
                $variant,
            )*
        }

        impl BuiltinStyle {
            /// All built-ins, in registration order.
            pub const ALL: &'static [BuiltinStyle] = &[$(BuiltinStyle::$variant),*];

            /// The registry name, e.g. `"bgRed"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(BuiltinStyle::$variant => $name,)*
                }
            }

            /// The `(open, close)` SGR parameters.
            pub const fn codes(self) -> (u16, u16) {
                match self {
                    $(BuiltinStyle::$variant => ($open, $close),)*
                }
            }

            /// The introspection group this style is listed under.
            pub const fn category(self) -> Category {
                match self {
                    $(BuiltinStyle::$variant => Category::$category,)*
                }
            }

            /// Looks a built-in up by its registry name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(BuiltinStyle::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_builtin!(define_builtin_enum);
