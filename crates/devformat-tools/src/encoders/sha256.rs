//! SHA-256 digest

use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use sha2::{Digest, Sha256};

pub fn sha256_generator() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "sha256-generator",
            "SHA-256 Hash Generator",
            ToolCategory::Encoders,
            "sha256",
        )
        .with_description("Generate SHA-256 cryptographic hash digests from any text input.")
        .with_keywords(["sha256", "sha-256", "hash", "digest", "crypto", "checksum", "secure hash"])
        .with_sample("Hello, World!"),
        run,
    )
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    ToolResult::success(format!("Input: {input}\n\nSHA-256: {digest}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_digest() {
        let result = run("Hello, World!", &ToolOptions::default());
        assert_eq!(
            result.output(),
            "Input: Hello, World!\n\nSHA-256: dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
        );
    }
}
