//! Tool contract shared by every catalog entry.

mod contract;
mod definition;
mod types;

pub use contract::{FnTool, Tool, ToolFault, ToolFn};
pub use definition::ToolDefinition;
pub use types::{
    DEFAULT_INDENT_SIZE, FailureKind, OptionKey, ToolCategory, ToolMode, ToolOptions, ToolResult,
};
