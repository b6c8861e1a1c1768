//! SQL string literal escape/unescape

use crate::util::sections;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn sql_escaper() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "sql-escaper",
            "SQL String Escape/Unescape",
            ToolCategory::Escapers,
            "sql",
        )
        .with_description(
            "Escape strings for safe use in SQL queries to prevent SQL injection, or unescape SQL strings.",
        )
        .with_language("sql")
        .with_keywords(["sql", "escape", "unescape", "injection", "sanitize", "query", "string"])
        .with_sample("O'Brien said \"Hello\"\nLine 2\\Path"),
        run,
    )
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "''")
        .replace('"', "\\\"")
        .replace('\0', "\\0")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\x1a', "\\Z")
}

fn unescape(text: &str) -> String {
    text.replace("''", "'")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
        .replace("\\0", "\0")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\Z", "\x1a")
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let escaped = format!("'{}'", escape(input));
    ToolResult::success(sections(&[
        ("Escaped", &escaped),
        ("Unescaped", &unescape(input)),
    ]))
}
