//! Number base converter

use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

const INVALID_NUMBER: &str = "Invalid number. Supports: decimal, 0b (binary), 0o (octal), 0x (hex)";

pub fn number_base_converter() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "number-base-converter",
            "Number Base Converter",
            ToolCategory::Converters,
            "number-base",
        )
        .with_description(
            "Convert numbers between binary (base 2), octal (base 8), decimal (base 10), and hexadecimal (base 16).",
        )
        .with_keywords([
            "number",
            "base",
            "binary",
            "octal",
            "decimal",
            "hex",
            "hexadecimal",
            "convert",
            "radix",
        ])
        .with_sample("255"),
        run,
    )
}

/// Optional sign, then the longest run of digits valid in `radix`;
/// anything after that is ignored.
fn parse_leading(text: &str, radix: u32) -> Option<i64> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest.find(|c: char| !c.is_digit(radix)).unwrap_or(rest.len());
    let magnitude = i64::from_str_radix(&rest[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn all_digits(text: &str, radix: u32) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_digit(radix))
}

/// Read `text` (already lower-cased) using its prefix or suffix notation.
fn parse_number(text: &str) -> Option<i64> {
    if let Some(bin) = text.strip_prefix("0b") {
        return parse_leading(bin, 2);
    }
    if let Some(oct) = text.strip_prefix("0o") {
        return parse_leading(oct, 8);
    }
    if let Some(hex) = text.strip_prefix("0x") {
        return parse_leading(hex, 16);
    }
    if let Some(bin) = text.strip_suffix('b').filter(|t| all_digits(t, 2)) {
        return parse_leading(bin, 2);
    }
    if let Some(hex) = text.strip_suffix('h').filter(|t| all_digits(t, 16)) {
        return parse_leading(hex, 16);
    }
    parse_leading(text, 10)
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let trimmed = input.trim().to_lowercase();
    let Some(value) = parse_number(&trimmed) else {
        return ToolResult::failure(INVALID_NUMBER);
    };
    // Radix lines show the value wrapped to an unsigned 32-bit word
    let bits = value as u32;
    ToolResult::success(format!(
        "Input:       {trimmed}\n\nBinary:      0b{bits:b}\nOctal:       0o{bits:o}\nDecimal:     {value}\nHexadecimal: 0x{bits:X}"
    ))
}
