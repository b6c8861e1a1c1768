//! Theme-aware terminal colours

use colored::{ColoredString, Colorize};

use crate::config::Theme;

/// Colour choices for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    theme: Theme,
}

impl Style {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Category and section headings
    pub fn heading(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.blue().bold(),
            Theme::Dark => text.cyan().bold(),
        }
    }

    /// Tool ids and other identifiers
    pub fn ident(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.green(),
            Theme::Dark => text.bright_green(),
        }
    }

    /// The highlighted part of a search match
    pub fn mark(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.magenta().bold().underline(),
            Theme::Dark => text.yellow().bold().underline(),
        }
    }

    pub fn dim(&self, text: &str) -> ColoredString {
        text.dimmed()
    }
}
