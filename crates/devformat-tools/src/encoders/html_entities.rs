//! HTML entity encode/decode

use crate::util::{decode_numeric_entities, sections};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

const ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('/', "&#x2F;"),
];

/// Named references decoded besides the ones [`ENTITIES`] produces.
const EXTRA_NAMED: &[(&str, char)] = &[("&apos;", '\''), ("&nbsp;", '\u{a0}')];

pub fn html_entities_encoder() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "html-entities-encoder",
            "HTML Entities Encode/Decode",
            ToolCategory::Encoders,
            "html-entities",
        )
        .with_description(
            "Encode special characters to HTML entities or decode HTML entities back to characters.",
        )
        .with_language("html")
        .with_keywords([
            "html",
            "entities",
            "encode",
            "decode",
            "amp",
            "lt",
            "gt",
            "special characters",
        ])
        .with_sample(r#"<div class="hello">Tom & Jerry's "Adventure" < 5/10</div>"#),
        run,
    )
}

pub(crate) fn encode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ENTITIES.iter().find(|(ch, _)| *ch == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Decode the named references in a single left-to-right pass, then
/// numeric references.
pub(crate) fn decode_entities(text: &str) -> String {
    let named = ENTITIES
        .iter()
        .map(|(c, entity)| (*entity, *c))
        .chain(EXTRA_NAMED.iter().copied());
    let named: Vec<(&str, char)> = named.collect();

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match named.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, c)) => {
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
    decode_numeric_entities(&out)
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    ToolResult::success(sections(&[
        ("Encoded", &encode_entities(input)),
        ("Decoded", &decode_entities(input)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_encodes_all_special_characters() {
        assert_eq!(
            encode_entities(r#"<a href="/x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;&#x2F;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;&#x2F;a&gt;"
        );
    }

    #[rstest]
    #[case("&lt;b&gt; &amp; &quot;q&quot;", "<b> & \"q\"")]
    #[case("&#169; &#x263A;", "© ☺")]
    #[case("&amp;lt;", "&lt;")]
    #[case("&unknown; & done", "&unknown; & done")]
    fn test_decode_entities(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decode_entities(input), expected);
    }
}
