//! Text case converter

use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use regex::Regex;
use std::sync::LazyLock;

static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static ACRONYM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_./\\]+").unwrap());

pub fn text_case_converter() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "text-case-converter",
            "Text Case Converter",
            ToolCategory::Converters,
            "text-case",
        )
        .with_description(
            "Convert text between camelCase, PascalCase, snake_case, kebab-case, Title Case, UPPER_CASE, and more.",
        )
        .with_keywords([
            "case", "camel", "pascal", "snake", "kebab", "title", "upper", "lower", "convert", "text",
        ])
        .with_sample("hello world example text"),
        run,
    )
}

/// Split on case boundaries (`fooBar`, `HTTPServer`) and separators.
pub(crate) fn words(text: &str) -> Vec<String> {
    let spaced = LOWER_UPPER.replace_all(text, "$1 $2");
    let spaced = ACRONYM_WORD.replace_all(&spaced, "$1 $2");
    let spaced = SEPARATORS.replace_all(&spaced, " ");
    spaced.split_whitespace().map(str::to_string).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

fn join_mapped(words: &[String], sep: &str, f: impl Fn(&str) -> String) -> String {
    words.iter().map(|w| f(w.as_str())).collect::<Vec<_>>().join(sep)
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let words = words(input.trim());
    let Some((first, rest)) = words.split_first() else {
        return ToolResult::failure("Please enter some text to convert");
    };
    let camel = format!("{}{}", first.to_lowercase(), join_mapped(rest, "", capitalize));
    let lines = [
        format!("camelCase:    {camel}"),
        format!("PascalCase:   {}", join_mapped(&words, "", capitalize)),
        format!("snake_case:   {}", join_mapped(&words, "_", str::to_lowercase)),
        format!("kebab-case:   {}", join_mapped(&words, "-", str::to_lowercase)),
        format!("Title Case:   {}", join_mapped(&words, " ", capitalize)),
        format!("CONSTANT:     {}", join_mapped(&words, "_", str::to_uppercase)),
        format!("lowercase:    {}", join_mapped(&words, " ", str::to_lowercase)),
        format!("UPPERCASE:    {}", join_mapped(&words, " ", str::to_uppercase)),
    ];
    ToolResult::success(lines.join("\n"))
}
