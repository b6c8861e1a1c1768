//! Core of DevFormat: the tool contract, the registry, search and execution
//! sessions.
//!
//! # Architecture
//!
//! Every tool is a [`Tool`]: static [`ToolDefinition`] metadata plus an async
//! `execute`. Tools live in an ordered, immutable [`ToolRegistry`] built once
//! at start-up. Two independent consumers read it:
//!
//! ```text
//!                ToolRegistry
//!                /          \
//!        search / palette   ExecutionSession (one per open tool)
//! ```
//!
//! Sessions normalize every outcome, including tool faults and panics, into a
//! [`ToolResult`]. The catalog itself lives in `devformat-tools`.

pub mod error;
pub mod logging;
pub mod registry;
pub mod search;
pub mod session;
pub mod tool;

pub use error::{Error, Result, SessionError};
pub use registry::{RouteEntry, ToolRegistry};
pub use search::{
    Highlight, Key, Navigation, PaletteEvent, SearchGroup, SearchPalette, SearchResults,
    highlight, search,
};
pub use session::{ExecuteOutcome, ExecutionSession, SessionState, SkipReason};
pub use tool::{
    FailureKind, FnTool, OptionKey, Tool, ToolCategory, ToolDefinition, ToolFault, ToolMode,
    ToolOptions, ToolResult,
};
