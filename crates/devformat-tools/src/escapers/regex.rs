//! Regex metacharacter escape/unescape

use crate::util::sections;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use regex::Regex;
use std::sync::LazyLock;

const METACHARACTERS: &str = r".*+?^${}()|[]\";

static ESCAPED_METACHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([.*+?^${}()|\[\]\\])").unwrap());

pub fn regex_escaper() -> FnTool {
    FnTool::new(
        ToolDefinition::new("regex-escaper", "Regex Escape/Unescape", ToolCategory::Escapers, "regex")
            .with_description(
                "Escape special regex metacharacters for literal use in regular expressions, or unescape them.",
            )
            .with_keywords([
                "regex",
                "regexp",
                "escape",
                "unescape",
                "regular expression",
                "metacharacters",
                "pattern",
            ])
            .with_sample("price is $9.99 (USD) [sale] {today} hello.world+test"),
        run,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if METACHARACTERS.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn unescape(text: &str) -> String {
    ESCAPED_METACHARACTER.replace_all(text, "$1").into_owned()
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    ToolResult::success(sections(&[
        ("Escaped", &escape(input)),
        ("Unescaped", &unescape(input)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_sample() {
        assert_eq!(
            escape("price is $9.99 (USD) [sale] {today} a|b\\c"),
            r"price is \$9\.99 \(USD\) \[sale\] \{today\} a\|b\\c"
        );
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"\$9\.99 \d \\"), r"$9.99 \d \");
    }

    #[test]
    fn test_non_metacharacters_untouched() {
        assert_eq!(escape("a-b#c"), "a-b#c");
    }
}
