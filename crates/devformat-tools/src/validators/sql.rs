//! SQL syntax validator

use crate::formatters::sql::format_sql;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

pub fn sql_validator() -> FnTool {
    FnTool::new(
        ToolDefinition::new("sql-validator", "SQL Validator", ToolCategory::Validators, "sql")
            .with_description("Validate SQL syntax by attempting to parse the query.")
            .with_language("sql")
            .with_keywords(["sql", "validate", "check", "syntax", "query", "database"])
            .with_sample(
                "SELECT u.id, u.name, o.total\nFROM users u\nJOIN orders o ON u.id = o.user_id\nWHERE u.active = 1\nORDER BY o.total DESC;",
            ),
        run,
    )
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let dialect = GenericDialect {};
    if let Err(e) = Parser::parse_sql(&dialect, input) {
        return ToolResult::failure(e.to_string());
    }
    match format_sql(input, "  ") {
        Ok(formatted) => ToolResult::success(format!("Valid SQL\n\nFormatted output:\n\n{formatted}")),
        Err(e) => ToolResult::failure(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query_includes_formatted_form() {
        let result = run("select a from t", &ToolOptions::default());
        assert_eq!(
            result.output(),
            "Valid SQL\n\nFormatted output:\n\nSELECT\n  a\nFROM\n  t"
        );
    }

    #[test]
    fn test_sample_is_valid() {
        let tool = sql_validator();
        let sample = &devformat_core::Tool::definition(&tool).sample_input;
        assert!(run(sample, &ToolOptions::default()).is_success());
    }

    #[test]
    fn test_syntax_error_reported() {
        let result = run("SELEC a FROM t", &ToolOptions::default());
        assert!(!result.is_success());
        assert!(result.error().is_some_and(|e| !e.is_empty()));
    }
}
