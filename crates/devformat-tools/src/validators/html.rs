//! HTML structure checker

use crate::markup::{self, Dialect};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn html_validator() -> FnTool {
    FnTool::new(
        ToolDefinition::new("html-validator", "HTML Validator", ToolCategory::Validators, "html")
            .with_description("Validate HTML structure and check for common issues.")
            .with_language("html")
            .with_keywords(["html", "validate", "check", "structure", "lint", "accessibility"])
            .with_sample(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <title>Test Page</title>\n</head>\n<body>\n  <h1>Hello World</h1>\n  <p>This is a valid HTML document.</p>\n</body>\n</html>",
            ),
        run,
    )
}

fn collect_issues(input: &str) -> Vec<String> {
    let doc = match markup::parse(input, Dialect::Html) {
        Ok(doc) => doc,
        Err(e) => return vec![format!("HTML parsing error: {e}")],
    };
    let mut issues = doc.issues.clone();

    if !input.to_lowercase().contains("<!doctype") {
        issues.push("Missing DOCTYPE declaration".to_string());
    }
    // <html>, <head> and <body> are implied by an HTML parser when omitted
    if doc.find("title").is_none() {
        issues.push("Missing <title> element".to_string());
    }
    let images = doc
        .elements()
        .into_iter()
        .filter(|el| el.name.eq_ignore_ascii_case("img"));
    for (i, img) in images.enumerate() {
        if img.attribute("alt").unwrap_or_default().is_empty() {
            issues.push(format!("<img> element {} is missing alt attribute", i + 1));
        }
    }
    issues
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let issues = collect_issues(input);
    if issues.is_empty() {
        return ToolResult::success("Valid HTML\n\nNo structural issues found.");
    }
    let list = issues
        .iter()
        .map(|issue| format!("- {issue}"))
        .collect::<Vec<_>>()
        .join("\n");
    ToolResult::failure(format!("Found {} issue(s):\n\n{list}", issues.len()))
}
