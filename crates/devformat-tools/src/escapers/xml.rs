//! XML escape/unescape

use crate::util::sections;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

const XML_ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
];

pub fn xml_escaper() -> FnTool {
    FnTool::new(
        ToolDefinition::new("xml-escaper", "XML Escape/Unescape", ToolCategory::Escapers, "xml")
            .with_description(
                "Escape special characters for safe use in XML documents, or unescape XML entities.",
            )
            .with_language("xml")
            .with_keywords([
                "xml",
                "escape",
                "unescape",
                "entities",
                "amp",
                "lt",
                "gt",
                "special characters",
            ])
            .with_sample(r#"<user name="O'Brien">Tom & Jerry's "Adventure"</user>"#),
        run,
    )
}

fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match XML_ENTITIES.iter().find(|(ch, _)| *ch == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
        out
    })
}

/// Single left-to-right pass over the five predefined entities.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match XML_ENTITIES.iter().find(|(_, entity)| tail.starts_with(entity)) {
            Some((c, entity)) => {
                out.push(*c);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
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
    fn test_escape() {
        assert_eq!(
            escape(r#"<a b="c">it's & </a>"#),
            "&lt;a b=&quot;c&quot;&gt;it&apos;s &amp; &lt;/a&gt;"
        );
    }

    #[test]
    fn test_unescape_is_single_pass() {
        assert_eq!(unescape("&amp;lt; &apos;x&apos; &copy;"), "&lt; 'x' &copy;");
    }
}
