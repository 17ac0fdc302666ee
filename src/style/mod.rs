//! Style primitives: built-ins, escape codecs and the per-engine registry.
//!
//! - [`BuiltinStyle`]: the closed set of styles every engine starts with
//! - [`Codec`]: SGR open/close sequences and the wrap algorithm
//! - [`Style`]: a registry entry, either a codec or a custom transform
//! - [`AliasTarget`]: what an alias name can be bound to
//! - [`ColorsError`]: errors from name resolution

pub(crate) mod builtin;
mod codec;
mod error;
pub(crate) mod registry;
mod value;

pub use builtin::{BuiltinStyle, Category};
pub use codec::Codec;
pub use error::ColorsError;
pub use value::{AliasTarget, Style, Transform};

pub(crate) use value::split_path;
