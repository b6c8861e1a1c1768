//! Base64 encode/decode

use crate::util::sections;
use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use regex::Regex;
use std::sync::LazyLock;

static BASE64_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/\n\r]+=*$").unwrap());

/// Standard alphabet, padding optional, sloppy trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn base64_encoder() -> FnTool {
    FnTool::new(
        ToolDefinition::new("base64-encoder", "Base64 Encode/Decode", ToolCategory::Encoders, "base64")
            .with_description(
                "Encode text to Base64 or decode Base64 back to text with full UTF-8 support.",
            )
            .with_keywords(["base64", "encode", "decode", "binary", "ascii", "btoa", "atob"])
            .with_sample("Hello, World! This is a Base64 encoding test with UTF-8: café ñ 日本語"),
        run,
    )
}

/// Decode `text` if it is Base64 of valid UTF-8.
fn try_decode(text: &str) -> Option<String> {
    if text.len() < 4 || !BASE64_PATTERN.is_match(text) {
        return None;
    }
    let compact: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    let bytes = LENIENT.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let trimmed = input.trim();
    let output = match try_decode(trimmed) {
        Some(decoded) => sections(&[("Encoded", trimmed), ("Decoded", &decoded)]),
        None => sections(&[("Encoded", &STANDARD.encode(input)), ("Decoded", input)]),
    };
    ToolResult::success(output)
}
