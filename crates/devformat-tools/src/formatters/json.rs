//! JSON formatter

use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub fn json_formatter() -> FnTool {
    FnTool::new(
        ToolDefinition::new("json-formatter", "JSON Formatter", ToolCategory::Formatters, "json")
            .with_description("Format and beautify JSON data with customizable indentation.")
            .with_language("json")
            .with_keywords(["json", "format", "beautify", "pretty print", "indent", "minify"])
            .with_sample(
                r#"{"name":"John Doe","age":30,"address":{"street":"123 Main St","city":"Springfield"},"hobbies":["reading","coding","hiking"]}"#,
            ),
        run,
    )
}

/// Serialize `value` with `indent_size` spaces per level; zero gives the
/// compact form.
pub(crate) fn to_indented_string(
    value: &serde_json::Value,
    indent_size: usize,
) -> Result<String, serde_json::Error> {
    if indent_size == 0 {
        return serde_json::to_string(value);
    }
    let indent = " ".repeat(indent_size);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn run(input: &str, options: &ToolOptions) -> ToolResult {
    let parsed: serde_json::Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(e) => return ToolResult::failure(e.to_string()),
    };
    match to_indented_string(&parsed, options.indent_size) {
        Ok(output) => ToolResult::success(output),
        Err(e) => ToolResult::failure(e.to_string()),
    }
}
