//! XML formatter

use crate::markup::{self, Dialect};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};

pub fn xml_formatter() -> FnTool {
    FnTool::new(
        ToolDefinition::new("xml-formatter", "XML Formatter", ToolCategory::Formatters, "xml")
            .with_description("Format and beautify XML documents with proper indentation.")
            .with_language("xml")
            .with_keywords(["xml", "format", "beautify", "pretty print", "indent"])
            .with_sample(
                r#"<?xml version="1.0" encoding="UTF-8"?><catalog><book id="1"><title>JavaScript: The Good Parts</title><author>Douglas Crockford</author><year>2008</year></book><book id="2"><title>Clean Code</title><author>Robert C. Martin</author><year>2008</year></book></catalog>"#,
            ),
        run,
    )
}

fn run(input: &str, options: &ToolOptions) -> ToolResult {
    match markup::parse(input, Dialect::Xml) {
        Ok(doc) => ToolResult::success(markup::render(&doc, Dialect::Xml, &options.indent())),
        Err(e) => ToolResult::failure(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formats_sample_shape() {
        let input = r#"<?xml version="1.0"?><catalog><book id="1"><title>Clean Code</title></book></catalog>"#;
        let result = run(input, &ToolOptions::default());
        assert_eq!(
            result.output(),
            "<?xml version=\"1.0\"?>\n<catalog>\n  <book id=\"1\">\n    <title>Clean Code</title>\n  </book>\n</catalog>"
        );
    }

    #[test]
    fn test_indent_size_applies() {
        let result = run("<a><b/></a>", &ToolOptions::default().with_indent_size(4));
        assert_eq!(result.output(), "<a>\n    <b/>\n</a>");
    }

    #[test]
    fn test_comments_and_cdata_on_own_lines() {
        let result = run("<a><!-- note --><![CDATA[x<y]]></a>", &ToolOptions::default());
        assert_eq!(result.output(), "<a>\n  <!-- note -->\n  <![CDATA[x<y]]>\n</a>");
    }

    #[test]
    fn test_malformed_fails_with_line() {
        let result = run("<a>\n<b></a>", &ToolOptions::default());
        assert!(result.error().is_some_and(|e| e.contains("line 2")));
    }
}
