//! JSON <-> YAML converter

use crate::formatters::json::to_indented_string;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use serde_json::Value;

pub fn json_yaml_converter() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "json-yaml-converter",
            "JSON to YAML Converter",
            ToolCategory::Converters,
            "json-yaml",
        )
        .with_description(
            "Convert between JSON and YAML formats. Paste JSON to get YAML, or YAML to get JSON.",
        )
        .with_language("json")
        .with_keywords(["json", "yaml", "yml", "convert", "transform", "serialize", "deserialize"])
        .with_sample(
            r#"{
  "name": "DevFormat",
  "version": "1.0.0",
  "features": ["formatters", "validators", "converters"],
  "config": {
    "theme": "dark",
    "indent": 2
  }
}"#,
        ),
        run,
    )
}

fn convert(input: &str) -> Result<String, String> {
    if let Ok(json) = serde_json::from_str::<Value>(input) {
        let yaml = serde_yaml::to_string(&json).map_err(|e| e.to_string())?;
        return Ok(format!("--- YAML Output ---\n{yaml}"));
    }
    let value: Value = serde_yaml::from_str(input).map_err(|e| e.to_string())?;
    let json = to_indented_string(&value, 2).map_err(|e| e.to_string())?;
    Ok(format!("--- JSON Output ---\n{json}"))
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    match convert(input) {
        Ok(output) => ToolResult::success(output),
        Err(e) => ToolResult::failure(format!("Could not parse input as JSON or YAML: {e}")),
    }
}
