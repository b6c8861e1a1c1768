//! JSON validator

use crate::formatters::json::to_indented_string;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn json_validator() -> FnTool {
    FnTool::new(
        ToolDefinition::new("json-validator", "JSON Validator", ToolCategory::Validators, "json")
            .with_description("Validate JSON syntax and display detailed error information.")
            .with_language("json")
            .with_keywords(["json", "validate", "check", "syntax", "lint", "parse"])
            .with_sample(
                "{\n  \"name\": \"John Doe\",\n  \"age\": 30,\n  \"isActive\": true,\n  \"tags\": [\"developer\", \"designer\"]\n}",
            ),
        run,
    )
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let parsed: serde_json::Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(e) => return ToolResult::failure(e.to_string()),
    };
    match to_indented_string(&parsed, 2) {
        Ok(pretty) => ToolResult::success(format!("Valid JSON\n\n{pretty}")),
        Err(e) => ToolResult::failure(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_json_is_echoed_pretty() {
        let result = run("[1,{\"a\":null}]", &ToolOptions::default().with_indent_size(8));
        assert_eq!(
            result.output(),
            "Valid JSON\n\n[\n  1,\n  {\n    \"a\": null\n  }\n]"
        );
    }

    #[test]
    fn test_trailing_comma_reported() {
        let result = run("{\"a\": 1,}", &ToolOptions::default());
        assert!(!result.is_success());
        assert!(result.error().is_some_and(|e| e.contains("trailing comma")));
    }
}
