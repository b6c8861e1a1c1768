//! HTML formatter

use crate::markup::{self, Dialect};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn html_formatter() -> FnTool {
    FnTool::new(
        ToolDefinition::new("html-formatter", "HTML Formatter", ToolCategory::Formatters, "html")
            .with_description("Format and beautify HTML markup with proper indentation.")
            .with_language("html")
            .with_keywords(["html", "format", "beautify", "pretty print", "indent", "markup"])
            .with_sample(
                r#"<!DOCTYPE html><html><head><title>Hello</title></head><body><div class="container"><h1>Hello World</h1><p>This is a <strong>sample</strong> HTML document.</p><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul></div></body></html>"#,
            ),
        run,
    )
}

fn run(input: &str, options: &ToolOptions) -> ToolResult {
    match markup::parse(input, Dialect::Html) {
        Ok(doc) => {
            let mut output = markup::render(&doc, Dialect::Html, &options.indent());
            output.push('\n');
            ToolResult::success(output)
        }
        Err(e) => ToolResult::failure(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formats_sample() {
        let tool = html_formatter();
        let sample = &devformat_core::Tool::definition(&tool).sample_input;
        let result = run(sample, &ToolOptions::default());
        assert_eq!(
            result.output(),
            r#"<!DOCTYPE html>
<html>
  <head>
    <title>Hello</title>
  </head>
  <body>
    <div class="container">
      <h1>Hello World</h1>
      <p>This is a <strong>sample</strong> HTML document.</p>
      <ul>
        <li>Item 1</li>
        <li>Item 2</li>
        <li>Item 3</li>
      </ul>
    </div>
  </body>
</html>
"#
        );
    }

    #[test]
    fn test_pre_is_verbatim() {
        let result = run("<div><pre>  a\n    b</pre></div>", &ToolOptions::default());
        assert_eq!(result.output(), "<div>\n  <pre>  a\n    b</pre>\n</div>\n");
    }

    #[test]
    fn test_unterminated_tag_fails() {
        let result = run("<div class=\"x", &ToolOptions::default());
        assert!(!result.is_success());
    }
}
