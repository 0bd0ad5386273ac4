//! Configuration system for the calculator.
//!
//! This module defines the structures used to parameterize a session. It provides:
//! 1. **Defaults:** The 30-column ClaudiaCalc banner and debug-level logging.
//! 2. **Structures:** General (logging) and display (menu) settings.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Nothing is read implicitly; use `Config::default()` unless a file is passed
//! on the command line.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::common::error::CalcError;

/// Widest menu a configuration may request, in columns.
pub const MAX_MENU_WIDTH: usize = defaults::MAX_MENU_WIDTH;

/// Default configuration constants for the calculator.
mod defaults {
    /// Width of the menu separator lines, in columns.
    pub const MENU_WIDTH: usize = 30;

    /// Widest accepted menu, in columns.
    pub const MAX_MENU_WIDTH: usize = 1024;

    /// Title centered in the menu banner.
    pub const TITLE: &str = "ClaudiaCalc";

    /// Default log level. Debug output is on so every command is traced.
    pub const LOG_LEVEL: &str = "debug";
}

/// Root configuration structure containing all calculator settings.
///
/// # Examples
///
/// ```
/// use claudia_calc_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.display.menu_width, 30);
/// assert_eq!(config.display.title, "ClaudiaCalc");
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use claudia_calc_core::config::Config;
///
/// let json = r#"{
///     "general": { "log_level": "info" },
///     "display": { "menu_width": 40 }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.log_level, "info");
/// assert_eq!(config.display.menu_width, 40);
/// assert!(config.display.show_menu_on_start);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General settings (logging).
    #[serde(default)]
    pub general: GeneralConfig,
    /// Menu and banner settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Config`] if the JSON is malformed or a value is invalid.
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalcError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Io`] if the file cannot be read, or
    /// [`CalcError::Config`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CalcError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks values that deserialization alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Config`] for an unknown log level or a menu width
    /// outside `1..=`[`MAX_MENU_WIDTH`].
    pub fn validate(&self) -> Result<(), CalcError> {
        let _ = self.general.level_filter()?;
        let width = self.display.menu_width;
        if !(1..=MAX_MENU_WIDTH).contains(&width) {
            return Err(CalcError::Config(format!(
                "display.menu_width must be between 1 and {MAX_MENU_WIDTH}, got {width}"
            )));
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log level for the log stream (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "GeneralConfig::default_log_level")]
    pub log_level: String,
}

impl GeneralConfig {
    fn default_log_level() -> String {
        defaults::LOG_LEVEL.to_string()
    }

    /// Parses [`log_level`](Self::log_level) into a tracing level filter.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Config`] if the level name is not recognized.
    pub fn level_filter(&self) -> Result<LevelFilter, CalcError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|e| CalcError::Config(format!("log_level '{}': {e}", self.log_level)))
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}

/// Menu banner settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Width of the separator lines and of the centered title.
    #[serde(default = "DisplayConfig::default_menu_width")]
    pub menu_width: usize,

    /// Title shown between the top separator lines.
    #[serde(default = "DisplayConfig::default_title")]
    pub title: String,

    /// Print the menu once before the first prompt.
    #[serde(default = "DisplayConfig::default_show_menu_on_start")]
    pub show_menu_on_start: bool,
}

impl DisplayConfig {
    const fn default_menu_width() -> usize {
        defaults::MENU_WIDTH
    }

    fn default_title() -> String {
        defaults::TITLE.to_string()
    }

    const fn default_show_menu_on_start() -> bool {
        true
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            menu_width: Self::default_menu_width(),
            title: Self::default_title(),
            show_menu_on_start: Self::default_show_menu_on_start(),
        }
    }
}
