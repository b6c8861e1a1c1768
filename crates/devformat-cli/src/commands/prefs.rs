//! Shell preferences: theme, compact listings and default indent

use std::path::Path;

use colored::Colorize;

use crate::cli::ThemeArg;
use crate::config::{Config, Theme};
use crate::error::Result;
use crate::style::Style;

/// Requested preference changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefsUpdate {
    pub theme: Option<ThemeArg>,
    pub compact: Option<bool>,
    pub indent_size: Option<usize>,
}

impl PrefsUpdate {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.compact.is_none() && self.indent_size.is_none()
    }

    /// Apply to `config`, returning whether anything changed.
    pub fn apply(&self, config: &mut Config) -> bool {
        let before = config.clone();
        if let Some(theme) = self.theme {
            config.ui.theme = Some(match theme {
                ThemeArg::Light => Theme::Light,
                ThemeArg::Dark => Theme::Dark,
                ThemeArg::Toggle => config.theme().toggled(),
            });
        }
        if let Some(compact) = self.compact {
            config.ui.compact = compact;
        }
        if let Some(indent_size) = self.indent_size {
            config.tools.indent_size = indent_size;
        }
        *config != before
    }
}

/// Run the prefs command
pub fn run_prefs(config: &mut Config, path: &Path, update: PrefsUpdate) -> Result<()> {
    if !update.is_empty() && update.apply(config) {
        config.save(path)?;
        println!("{} Saved preferences to {}", "✓".green().bold(), path.display());
    }

    let theme = config.theme();
    let style = Style::new(theme);
    let origin = if config.ui.theme.is_some() { "" } else { " (detected)" };
    println!("{}", "Preferences".bold());
    println!("  {:<12} {}{}", style.heading("theme"), theme, style.dim(origin));
    println!("  {:<12} {}", style.heading("compact"), config.ui.compact);
    println!("  {:<12} {}", style.heading("indent_size"), config.tools.indent_size);
    println!("  {:<12} {}", style.heading("file"), style.dim(&path.display().to_string()));
    Ok(())
}
