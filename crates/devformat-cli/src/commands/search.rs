//! Search and show commands

use colored::Colorize;
use devformat_core::{Tool, ToolRegistry, highlight, search};
use serde_json::json;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::style::Style;

/// Look a tool up by id or route.
pub fn resolve_tool<'r>(
    registry: &'r ToolRegistry,
    id_or_route: &str,
) -> Result<&'r std::sync::Arc<dyn Tool>> {
    registry.resolve(id_or_route.trim()).ok_or_else(|| {
        CliError::user(format!(
            "Unknown tool '{id_or_route}'. Run 'devformat list' to see available tools."
        ))
    })
}

/// Run the search command
pub fn run_search(registry: &ToolRegistry, config: &Config, query: &str, json: bool) -> Result<()> {
    let results = search(registry, query);

    if json {
        let groups: Vec<_> = results
            .groups()
            .iter()
            .map(|g| {
                json!({
                    "category": g.category,
                    "tools": g.tools.iter().map(|t| t.definition()).collect::<Vec<_>>(),
                })
            })
            .collect();
        let value = json!({ "query": results.query(), "groups": groups });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No tools found for \"{}\"", results.query());
        return Ok(());
    }

    let style = Style::new(config.theme());
    for group in results.groups() {
        println!("{}:", style.heading(group.category.label()));
        for tool in &group.tools {
            let def = tool.definition();
            let name = highlight(&def.name, results.query()).render_with(|m| style.mark(m));
            println!("  {:<24} {}", style.ident(&def.id), name);
            if !config.ui.compact {
                println!("  {:<24} {}", "", style.dim(&def.route));
            }
        }
        println!();
    }
    println!("{} {} matches", "Total:".bold(), results.len());
    Ok(())
}

/// Run the show command
pub fn run_show(registry: &ToolRegistry, config: &Config, id_or_route: &str) -> Result<()> {
    let tool = resolve_tool(registry, id_or_route)?;
    let def = tool.definition();
    let style = Style::new(config.theme());

    println!("{}", def.page_title().bold());
    println!();
    let rows = [
        ("id", def.id.as_str()),
        ("name", def.name.as_str()),
        ("category", def.category.label()),
        ("route", def.route.as_str()),
        ("language", def.language.as_str()),
    ];
    for (label, value) in rows {
        println!("  {:<12} {}", style.heading(label), value);
    }
    println!("  {:<12} {}", style.heading("mode"), def.mode);
    println!("  {:<12} {}", style.heading("keywords"), def.keywords.join(", "));
    println!("  {:<12} {}", style.heading("description"), def.description);

    println!();
    println!("{}", style.heading("Sample input:"));
    if def.sample_input.is_empty() {
        println!("  {}", style.dim("(none)"));
    } else {
        for line in def.sample_input.lines() {
            println!("  {line}");
        }
    }
    Ok(())
}
