//! Small helpers shared by several tools.

/// Parse a leading integer the lenient way count fields expect: optional
/// sign, then digits, trailing junk ignored. Zero and unparsable input fall
/// back to `default`; the result is clamped to `min..=max`.
pub fn parse_count(input: &str, default: i64, min: i64, max: i64) -> i64 {
    let trimmed = input.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value = digits
        .parse::<i64>()
        .ok()
        .map(|n| n * sign)
        .filter(|&n| n != 0)
        .unwrap_or(default);
    value.clamp(min, max)
}

/// Render labelled output sections separated by blank lines.
///
/// `sections(&[("Escaped", a), ("Unescaped", b)])` gives
/// `--- Escaped ---\na\n\n--- Unescaped ---\nb`.
pub fn sections(parts: &[(&str, &str)]) -> String {
    parts
        .iter()
        .map(|(title, body)| format!("--- {title} ---\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replace every `&#NNN;` and `&#xHH;` reference with its character.
/// Invalid code points are left as written.
pub fn decode_numeric_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("&#") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 2..];
        let (radix, body) = match tail.strip_prefix(['x', 'X']) {
            Some(hex) => (16, hex),
            None => (10, tail),
        };
        let digits_len = body
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(body.len());
        let decoded = (digits_len > 0 && body[digits_len..].starts_with(';'))
            .then(|| u32::from_str_radix(&body[..digits_len], radix).ok())
            .flatten()
            .and_then(char::from_u32);
        match decoded {
            Some(c) => {
                out.push(c);
                let consumed = (tail.len() - body.len()) + digits_len + 1;
                rest = &tail[consumed..];
            }
            None => {
                out.push_str("&#");
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
