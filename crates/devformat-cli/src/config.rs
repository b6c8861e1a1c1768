//! Persisted shell configuration
//!
//! A single TOML file:
//!
//! ```toml
//! [tools]
//! indent_size = 2
//!
//! [ui]
//! theme = "light"
//! compact = false
//! ```
//!
//! A missing file yields the defaults. Saving rewrites the whole file. With
//! no theme set, the terminal's `COLORFGBG` hint decides, else light.

use std::fmt;
use std::path::{Path, PathBuf};

use devformat_core::tool::DEFAULT_INDENT_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Environment variable overriding the config location
pub const CONFIG_ENV: &str = "DEVFORMAT_CONFIG";

/// Colour theme of the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read a `COLORFGBG` value ("fg;bg"). Background colours 0-6 and 8
    /// are dark.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(if bg <= 6 || bg == 8 {
            Self::Dark
        } else {
            Self::Light
        })
    }

    /// Theme suggested by the terminal, light when unknown.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| Self::from_colorfgbg(&v))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[tools]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Indent width handed to formatting tools
    pub indent_size: usize,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

/// `[ui]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Hide descriptions in listings
    pub compact: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Effective theme: configured, else detected.
    pub fn theme(&self) -> Theme {
        self.ui.theme.unwrap_or_else(Theme::detect)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::config(path, e))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write the whole config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| CliError::config(path, e))?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }
}

/// Config location: the explicit path if given, else
/// `<config dir>/devformat/config.toml`.
///
/// `DEVFORMAT_CONFIG` reaches this function through clap's `env` support.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    dirs::config_dir()
        .map(|d| d.join("devformat").join("config.toml"))
        .ok_or_else(|| {
            CliError::user(format!(
                "Could not determine a config directory; set {CONFIG_ENV} or pass --config"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tools.indent_size, 2);
        assert_eq!(config.ui.theme, None);
        assert!(!config.ui.compact);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ui.theme, Some(Theme::Dark));
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.tools.indent_size, 2);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ntheme = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_unknown_theme_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"blue\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            tools: ToolsConfig { indent_size: 4 },
            ui: UiConfig {
                theme: Some(Theme::Dark),
                compact: true,
            },
        };

        config.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[tools]"));
        assert!(text.contains("theme = \"dark\""));
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_colorfgbg_hint() {
        assert_eq!(Theme::from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("0;default;15"), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg("12;8"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_save_skips_unset_theme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Config::default().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("theme"));
        assert!(text.contains("compact = false"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_path(Some(Path::new("/tmp/x.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/x.toml"));
    }
}
