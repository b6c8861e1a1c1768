//! CLI argument definitions using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::CONFIG_ENV;

/// DevFormat developer micro-tools
#[derive(Parser, Debug)]
#[command(name = "devformat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Theme argument for `prefs`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    /// Switch to the other theme
    Toggle,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tool catalog grouped by category
    ///
    /// Examples:
    ///   devformat list
    ///   devformat list --category encoders
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search tools by name, description, category or keyword
    Search {
        /// Search text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show every field of one tool
    Show {
        /// Tool id (e.g. json-formatter) or route (e.g. /formatters/json)
        tool: String,
    },

    /// Run a tool on some input
    ///
    /// Examples:
    ///   devformat run json-formatter '{"a":1}'
    ///   cat page.html | devformat run /formatters/html -
    ///   devformat run uuid-generator 3
    Run {
        /// Tool id or route
        tool: String,

        /// Input text; `-` reads stdin
        input: Option<String>,

        /// Read input from a file
        #[arg(short, long, conflicts_with_all = ["input", "sample"])]
        file: Option<PathBuf>,

        /// Use the tool's sample input
        #[arg(short, long, conflicts_with = "input")]
        sample: bool,

        /// Indent width for formatting tools (overrides config)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=16))]
        indent: Option<u8>,
    },

    /// Print the route table
    Routes {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive search palette
    Palette,

    /// Show or change shell preferences
    ///
    /// Examples:
    ///   devformat prefs
    ///   devformat prefs --theme toggle
    ///   devformat prefs --compact true
    Prefs {
        /// Set or toggle the theme
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,

        /// Hide descriptions in listings
        #[arg(long)]
        compact: Option<bool>,

        /// Default indent width for formatting tools
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=16))]
        indent_size: Option<u8>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   devformat completions bash > ~/.local/share/bash-completion/completions/devformat
    ///   devformat completions fish > ~/.config/fish/completions/devformat.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
