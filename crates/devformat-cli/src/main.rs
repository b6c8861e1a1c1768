//! DevFormat CLI
//!
//! Command-line shell over the DevFormat tool catalog: browse, search and
//! run the built-in tools.

mod cli;
mod commands;
mod config;
mod error;
mod style;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use devformat_core::logging;

use cli::{Cli, Commands};
use config::Config;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "debug" } else { "warn" };
    logging::init_with_default(directive)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "devformat", &mut std::io::stdout());
            Ok(())
        }
        Some(cmd) => {
            let config_path = config::resolve_path(cli.config.as_deref())?;
            let config = Config::load(&config_path)?;
            execute_command(cmd, config, &config_path)
        }
        None => {
            println!("{} developer micro-tools", "devformat".green().bold());
            println!();
            println!("Run {} for available commands.", "devformat --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, mut config: Config, config_path: &std::path::Path) -> Result<()> {
    let registry = devformat_tools::builtin_registry()?;

    match cmd {
        Commands::List { category, json } => {
            commands::run_list(&registry, &config, category.as_deref(), json)
        }
        Commands::Search { query, json } => {
            commands::run_search(&registry, &config, &query.join(" "), json)
        }
        Commands::Show { tool } => commands::run_show(&registry, &config, &tool),
        Commands::Run {
            tool,
            input,
            file,
            sample,
            indent,
        } => {
            let source = commands::InputSource::from_args(input, file.as_deref(), sample);
            commands::run_tool(&registry, &config, &tool, &source, indent.map(usize::from))
        }
        Commands::Routes { json } => commands::run_routes(&registry, json),
        Commands::Palette => commands::run_palette(&registry, &config),
        Commands::Prefs {
            theme,
            compact,
            indent_size,
        } => commands::run_prefs(
            &mut config,
            config_path,
            commands::PrefsUpdate {
                theme,
                compact,
                indent_size: indent_size.map(usize::from),
            },
        ),
        // Handled in run() before the config is loaded
        Commands::Completions { .. } => Ok(()),
    }
}
