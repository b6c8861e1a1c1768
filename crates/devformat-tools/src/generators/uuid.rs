//! UUID v4 generator

use crate::util::parse_count;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolMode, ToolOptions, ToolResult};
use uuid::Uuid;

pub fn uuid_generator() -> FnTool {
    FnTool::new(
        ToolDefinition::new("uuid-generator", "UUID Generator", ToolCategory::Generators, "uuid")
            .with_description(
                "Generate random UUID v4 identifiers. Enter a number to generate multiple UUIDs (default: 5).",
            )
            .with_keywords(["uuid", "guid", "v4", "random", "unique", "identifier", "generate"])
            .with_sample("5")
            .with_mode(ToolMode::Generate),
        run,
    )
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let count = parse_count(input, 5, 1, 100);
    let uuids: Vec<String> = (0..count).map(|_| Uuid::new_v4().to_string()).collect();
    ToolResult::success(uuids.join("\n"))
}
