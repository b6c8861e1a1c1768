//! MD5 digest

use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use md5::{Digest, Md5};

pub fn md5_generator() -> FnTool {
    FnTool::new(
        ToolDefinition::new("md5-generator", "MD5 Hash Generator", ToolCategory::Encoders, "md5")
            .with_description(
                "Generate MD5 hash digests from any text input. Note: MD5 is not cryptographically secure.",
            )
            .with_keywords(["md5", "hash", "digest", "checksum", "fingerprint", "message digest"])
            .with_sample("Hello, World!"),
        run,
    )
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let digest = format!("{:x}", Md5::digest(input.as_bytes()));
    ToolResult::success(format!(
        "Input: {input}\n\nMD5: {digest}\n\nNote: MD5 is not recommended for security purposes."
    ))
}
