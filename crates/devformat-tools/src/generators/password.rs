//! Random password generator

use crate::util::parse_count;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolMode, ToolOptions, ToolResult};
use rand::Rng;

const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

const PASSWORD_COUNT: usize = 5;

pub fn password_generator() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "password-generator",
            "Password Generator",
            ToolCategory::Generators,
            "password",
        )
        .with_description(
            "Generate secure random passwords. Enter length (default: 16). Includes upper, lower, numbers, and symbols.",
        )
        .with_keywords([
            "password",
            "generate",
            "random",
            "secure",
            "strong",
            "passphrase",
            "credentials",
        ])
        .with_sample("16")
        .with_mode(ToolMode::Generate),
        run,
    )
}

fn strength(length: usize) -> &'static str {
    match length {
        20.. => "Very Strong",
        16..=19 => "Strong",
        12..=15 => "Good",
        _ => "Moderate",
    }
}

fn password(length: usize, rng: &mut impl Rng) -> String {
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let length = parse_count(input, 16, 4, 128) as usize;
    let mut rng = rand::thread_rng();
    let list = (1..=PASSWORD_COUNT)
        .map(|i| format!("{i}. {}", password(length, &mut rng)))
        .collect::<Vec<_>>()
        .join("\n");
    ToolResult::success(format!(
        "Password Length: {length}\nStrength: {}\nCharset: uppercase, lowercase, numbers, symbols\n\n{list}",
        strength(length)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(4, "Moderate")]
    #[case(12, "Good")]
    #[case(16, "Strong")]
    #[case(19, "Strong")]
    #[case(20, "Very Strong")]
    fn test_strength(#[case] length: usize, #[case] expected: &str) {
        assert_eq!(strength(length), expected);
    }

    #[test]
    fn test_output_shape() {
        let result = run("2", &ToolOptions::default());
        let output = result.output();
        assert!(output.starts_with("Password Length: 4\nStrength: Moderate\n"));
        let passwords: Vec<&str> = output.lines().skip(4).collect();
        assert_eq!(passwords.len(), 5);
        for (i, line) in passwords.iter().enumerate() {
            let (number, pw) = line.split_once(". ").unwrap();
            assert_eq!(number, (i + 1).to_string());
            assert_eq!(pw.len(), 4);
            assert!(pw.bytes().all(|b| CHARSET.contains(&b)));
        }
    }
}
