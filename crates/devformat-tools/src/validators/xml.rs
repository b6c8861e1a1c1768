//! XML well-formedness validator

use crate::markup::{self, Dialect};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn xml_validator() -> FnTool {
    FnTool::new(
        ToolDefinition::new("xml-validator", "XML Validator", ToolCategory::Validators, "xml")
            .with_description("Validate XML syntax and check for well-formedness.")
            .with_language("xml")
            .with_keywords(["xml", "validate", "check", "syntax", "well-formed", "parse"])
            .with_sample(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<catalog>\n  <book id=\"1\">\n    <title>JavaScript: The Good Parts</title>\n    <author>Douglas Crockford</author>\n  </book>\n</catalog>",
            ),
        run,
    )
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    match markup::parse(input, Dialect::Xml) {
        Ok(_) => ToolResult::success("Valid XML\n\nThe document is well-formed."),
        Err(e) => ToolResult::failure(e.to_string()),
    }
}
