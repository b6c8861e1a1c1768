//! The built-in DevFormat catalog: 28 tools in six categories.
//!
//! Each tool lives in its own module and is exposed through a factory
//! function returning a [`FnTool`](devformat_core::FnTool). [`builtins`]
//! assembles them, in listing order, into a
//! [`ToolRegistry`](devformat_core::ToolRegistry).

pub mod builtins;
pub mod converters;
pub mod encoders;
pub mod escapers;
pub mod formatters;
pub mod generators;
pub mod validators;

mod markup;
mod util;

pub use builtins::{BUILTIN_COUNT, builtin_registry, builtin_tools};
