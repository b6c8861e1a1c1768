//! The `Tool` trait every catalog entry implements.

use super::definition::ToolDefinition;
use super::types::{ToolOptions, ToolResult};
use async_trait::async_trait;

/// Abnormal failure of a tool's execute call.
///
/// Bad input is not a fault; it is reported as [`ToolResult::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ToolFault {
    pub message: String,
}

impl ToolFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Uniform contract for every tool in the catalog.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Static metadata (id, category, route, sample, mode, ...).
    fn definition(&self) -> &ToolDefinition;

    /// Run the tool. Must resolve; must not mutate shared state.
    async fn execute(&self, input: &str, options: &ToolOptions) -> Result<ToolResult, ToolFault>;

    fn id(&self) -> &str {
        &self.definition().id
    }
}

/// Signature of a synchronous tool body.
pub type ToolFn = fn(&str, &ToolOptions) -> ToolResult;

/// A tool made of a definition and one plain function.
///
/// Every built-in tool is synchronous; this adapts them to the async
/// contract.
#[derive(Debug, Clone)]
pub struct FnTool {
    definition: ToolDefinition,
    run: ToolFn,
}

impl FnTool {
    pub fn new(definition: ToolDefinition, run: ToolFn) -> Self {
        Self { definition, run }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, input: &str, options: &ToolOptions) -> Result<ToolResult, ToolFault> {
        Ok((self.run)(input, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolCategory;

    fn shout(input: &str, _options: &ToolOptions) -> ToolResult {
        ToolResult::success(input.to_uppercase())
    }

    #[tokio::test]
    async fn test_fn_tool_executes() {
        let tool = FnTool::new(
            ToolDefinition::new("shout", "Shout", ToolCategory::Converters, "shout"),
            shout,
        );
        let result = tool.execute("hi", &ToolOptions::default()).await.unwrap();
        assert_eq!(result, ToolResult::success("HI"));
        assert_eq!(tool.id(), "shout");
    }

    #[test]
    fn test_fault_display() {
        assert_eq!(ToolFault::new("kaput").to_string(), "kaput");
    }
}
