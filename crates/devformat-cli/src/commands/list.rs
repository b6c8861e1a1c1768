//! List and route-table commands

use colored::Colorize;
use devformat_core::{ToolCategory, ToolRegistry};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::style::Style;

/// Parse a `--category` value, turning a miss into a user error.
fn parse_category(name: &str) -> Result<ToolCategory> {
    name.parse::<ToolCategory>()
        .map_err(|e| CliError::user(e.to_string()))
}

/// Run the list command
pub fn run_list(
    registry: &ToolRegistry,
    config: &Config,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let filter = category.map(parse_category).transpose()?;
    let categories: Vec<ToolCategory> = ToolCategory::ALL
        .into_iter()
        .filter(|c| filter.is_none_or(|f| f == *c))
        .collect();

    if json {
        let tools: Vec<_> = categories
            .iter()
            .flat_map(|c| registry.by_category(*c))
            .map(|t| t.definition())
            .collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    let style = Style::new(config.theme());
    println!("{}", "Available Tools".bold());
    println!();

    let mut total = 0;
    for category in categories {
        let tools = registry.by_category(category);
        if tools.is_empty() {
            continue;
        }

        println!("{}:", style.heading(category.label()));
        for tool in tools {
            let def = tool.definition();
            println!("  {:<24} {}", style.ident(&def.id), def.name);
            if !config.ui.compact && !def.description.is_empty() {
                println!("  {:<24} {}", "", style.dim(&def.description));
            }
            total += 1;
        }
        println!();
    }

    println!("{} {} tools", "Total:".bold(), total);
    Ok(())
}

/// Run the routes command
pub fn run_routes(registry: &ToolRegistry, json: bool) -> Result<()> {
    let routes = registry.routes();
    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    let width = routes.iter().map(|r| r.route.len()).max().unwrap_or(0);
    for entry in routes {
        println!("{:<width$}  {}", entry.route, entry.id.green());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_accepts_singular() {
        assert_eq!(parse_category("Encoder").unwrap(), ToolCategory::Encoders);
    }

    #[test]
    fn test_unknown_category_lists_valid_values() {
        let err = parse_category("widgets").unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
        let message = err.to_string();
        assert!(message.contains("widgets"));
        assert!(message.contains("formatters, validators"));
    }
}
