//! URL component encode/decode

use crate::util::sections;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn url_encoder() -> FnTool {
    FnTool::new(
        ToolDefinition::new("url-encoder", "URL Encode/Decode", ToolCategory::Encoders, "url")
            .with_description(
                "Encode or decode URL components. Automatically detects whether to encode or decode.",
            )
            .with_keywords([
                "url",
                "encode",
                "decode",
                "percent",
                "uri",
                "encodeURIComponent",
                "query string",
            ])
            .with_sample("https://example.com/search?q=hello world&lang=en&tag=café"),
        run,
    )
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte)
}

/// Percent-encode everything outside the URI component unreserved set.
pub(crate) fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Decode `%XX` escapes; `None` if an escape is malformed or the bytes are
/// not UTF-8.
pub(crate) fn decode_component(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let encoded = encode_component(input);
    let decoded = decode_component(input).unwrap_or_else(|| input.to_string());
    ToolResult::success(sections(&[("URL Encoded", &encoded), ("URL Decoded", &decoded)]))
}
