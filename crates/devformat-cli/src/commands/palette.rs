//! Interactive search palette
//!
//! Prompts for a query, lets the user pick from the grouped matches, then
//! runs the chosen tool on prompted input.

use colored::Colorize;
use devformat_core::{ExecutionSession, SearchPalette, Tool, ToolMode, ToolOptions, ToolRegistry};
use dialoguer::{Input, Select};

use crate::commands::run::{execute, print_output};
use crate::config::Config;
use crate::error::Result;

/// Select-list labels for the palette's current matches, in cursor order.
fn entry_labels(palette: &SearchPalette<'_>) -> Vec<String> {
    palette
        .results()
        .groups()
        .iter()
        .flat_map(|group| {
            group.tools.iter().map(move |tool| {
                let def = tool.definition();
                format!("{:<11} {}  {}", group.category.label(), def.name, def.route)
            })
        })
        .collect()
}

/// Run the palette command
pub fn run_palette(registry: &ToolRegistry, config: &Config) -> Result<()> {
    let mut palette = SearchPalette::new(registry);
    palette.open();

    let query: String = Input::new()
        .with_prompt("Search tools")
        .allow_empty(true)
        .interact_text()?;
    palette.set_query(query);

    if palette.results().is_empty() {
        println!("No tools found for \"{}\"", palette.results().query());
        palette.cancel();
        return Ok(());
    }

    let labels = entry_labels(&palette);
    let choice = Select::new()
        .with_prompt("Pick a tool (Esc to cancel)")
        .items(&labels)
        .default(palette.cursor())
        .interact_opt()?;

    let Some(index) = choice else {
        palette.cancel();
        return Ok(());
    };
    palette.select(index);
    let Some(target) = palette.confirm() else {
        return Ok(());
    };
    let Some(tool) = registry.get(&target.id) else {
        return Ok(());
    };

    println!("{} {}", "→".green().bold(), target.route.dimmed());
    let options = ToolOptions::default().with_indent_size(config.tools.indent_size);
    let session = ExecutionSession::with_options(tool.clone(), options);
    prompt_input(&session, tool.as_ref())?;

    let output = execute(&session)?;
    println!();
    print_output(&output)
}

/// Ask for input; an empty answer falls back to the sample.
fn prompt_input(session: &ExecutionSession, tool: &dyn Tool) -> Result<()> {
    let def = tool.definition();
    let prompt = match def.mode {
        ToolMode::Generate => "Input (empty for default)",
        ToolMode::Transform => "Input (empty for sample)",
    };
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    if text.trim().is_empty() {
        session.load_sample()?;
    } else {
        session.set_input(text)?;
    }
    Ok(())
}
