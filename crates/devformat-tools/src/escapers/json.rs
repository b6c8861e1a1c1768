//! JSON string escape/unescape

use crate::util::sections;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn json_escaper() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "json-escaper",
            "JSON String Escape/Unescape",
            ToolCategory::Escapers,
            "json",
        )
        .with_description(
            "Escape special characters in strings for use in JSON, or unescape JSON-encoded strings.",
        )
        .with_language("json")
        .with_keywords(["json", "escape", "unescape", "string", "quotes", "backslash", "newline"])
        .with_sample("Hello \"World\"\nThis has a\ttab and a backslash: \\ and unicode: ©"),
        run,
    )
}

/// Parse `text` as a JSON string literal, adding the quotes when missing.
fn unescape(text: &str) -> Option<String> {
    let quoted = text.len() >= 2 && text.starts_with('"') && text.ends_with('"');
    let literal = if quoted {
        text.to_string()
    } else {
        format!("\"{text}\"")
    };
    serde_json::from_str(&literal).ok()
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let escaped = match serde_json::to_string(input) {
        Ok(escaped) => escaped,
        Err(e) => return ToolResult::failure(e.to_string()),
    };
    let unescaped = unescape(input).unwrap_or_else(|| input.to_string());
    ToolResult::success(sections(&[("Escaped", &escaped), ("Unescaped", &unescaped)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_quotes_and_controls() {
        let result = run("say \"hi\"\n\tdone", &ToolOptions::default());
        assert!(result.output().starts_with("--- Escaped ---\n\"say \\\"hi\\\"\\n\\tdone\""));
    }

    #[test]
    fn test_unescapes_with_or_without_quotes() {
        assert_eq!(unescape(r#"a\nb"#).as_deref(), Some("a\nb"));
        assert_eq!(unescape(r#""\u00e9""#).as_deref(), Some("é"));
    }

    #[test]
    fn test_raw_control_characters_fall_back() {
        let result = run("line1\nline2", &ToolOptions::default());
        assert!(result.output().ends_with("--- Unescaped ---\nline1\nline2"));
    }
}
