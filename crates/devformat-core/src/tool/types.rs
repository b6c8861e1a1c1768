//! Value types shared by every tool: category, mode, options and result.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tool category. The set is closed and its declaration order is the
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Formatters,
    Validators,
    Encoders,
    Escapers,
    Generators,
    Converters,
}

impl ToolCategory {
    /// All categories in display order.
    pub const ALL: [ToolCategory; 6] = [
        ToolCategory::Formatters,
        ToolCategory::Validators,
        ToolCategory::Encoders,
        ToolCategory::Escapers,
        ToolCategory::Generators,
        ToolCategory::Converters,
    ];

    /// Machine name, also used for search matching and routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formatters => "formatters",
            Self::Validators => "validators",
            Self::Encoders => "encoders",
            Self::Escapers => "escapers",
            Self::Generators => "generators",
            Self::Converters => "converters",
        }
    }

    /// Human-readable group label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Formatters => "Formatters",
            Self::Validators => "Validators",
            Self::Encoders => "Encoders",
            Self::Escapers => "Escapers",
            Self::Generators => "Generators",
            Self::Converters => "Converters",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.as_str().trim_end_matches('s') == wanted)
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
                valid: Self::ALL.map(|c| c.as_str()).join(", "),
            })
    }
}

/// Whether a tool needs input to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    /// Requires non-blank input and derives output from it
    Transform,
    /// May run on empty input; blank input is replaced by the sample
    Generate,
}

impl ToolMode {
    /// Whether `execute` may be invoked with blank input.
    pub fn allows_empty_input(&self) -> bool {
        matches!(self, Self::Generate)
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform => f.write_str("transform"),
            Self::Generate => f.write_str("generate"),
        }
    }
}

/// Default indentation width for tools that honor it.
pub const DEFAULT_INDENT_SIZE: usize = 2;

/// Options passed to every execute call. Tools ignore fields they don't use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOptions {
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

fn default_indent_size() -> usize {
    DEFAULT_INDENT_SIZE
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

impl ToolOptions {
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// One indentation unit as spaces.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_size)
    }
}

/// Option keys accepted by [`crate::session::ExecutionSession::set_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    IndentSize,
}

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The tool rejected its input
    InvalidInput,
    /// The tool itself misbehaved; synthesized by the session
    Internal,
}

/// Outcome of one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    Success { output: String },
    Failure { error: String, kind: FailureKind },
}

impl ToolResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self::Success {
            output: output.into(),
        }
    }

    /// Failure reported by a tool for bad input.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            kind: FailureKind::InvalidInput,
        }
    }

    /// Failure synthesized from an abnormal fault.
    pub fn internal(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            kind: FailureKind::Internal,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Output text; empty for failures.
    pub fn output(&self) -> &str {
        match self {
            Self::Success { output } => output,
            Self::Failure { .. } => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Text for the output panel: the output on success, the error otherwise.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Success { output } => output,
            Self::Failure { error, .. } => error,
        }
    }
}
