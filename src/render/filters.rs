//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::colors::Colors;
use crate::detect;

/// Registers the styling filters on a minijinja environment.
///
/// - `style(path)`: applies a dotted chain such as `"bold.red"` or an alias
///   name through `colors`; `none` and undefined values count as absent input
/// - `unstyle`: strips ANSI sequences from the value
pub fn register_filters(env: &mut Environment<'_>, colors: Colors) {
    env.add_filter("style", move |value: Value, path: String| -> Result<String, Error> {
        let chain = colors
            .parse(&path)
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;
        if value.is_undefined() || value.is_none() {
            return Ok(chain.apply_opt(None));
        }
        Ok(chain.apply(value.to_string()))
    });

    env.add_filter("unstyle", |value: Value| -> String { detect::unstyle(&value.to_string()) });
}
