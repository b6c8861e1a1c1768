//! HTML escape/unescape

use crate::util::{decode_numeric_entities, sections};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn html_escaper() -> FnTool {
    FnTool::new(
        ToolDefinition::new("html-escaper", "HTML Escape/Unescape", ToolCategory::Escapers, "html")
            .with_description(
                "Escape HTML special characters to prevent XSS, or unescape HTML entities back to text.",
            )
            .with_language("html")
            .with_keywords([
                "html",
                "escape",
                "unescape",
                "xss",
                "sanitize",
                "entities",
                "special characters",
            ])
            .with_sample(r#"<script>alert("XSS")</script> & <img src="x" onerror="alert('hack')">"#),
        run,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Replacements run one after another, so `&amp;lt;` ends up as `<`.
fn unescape(text: &str) -> String {
    let named = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    decode_numeric_entities(&named)
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    ToolResult::success(sections(&[
        ("Escaped", &escape(input)),
        ("Unescaped", &unescape(input)),
    ]))
}
