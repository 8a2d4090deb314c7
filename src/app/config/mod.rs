// SPDX-License-Identifier: MPL-2.0
//! Startup preferences read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Initial language and section
//! - `[window]` - Initial window size
//!
//! Every key is optional. The file is read once at startup and never written:
//! choices made while the application runs (such as toggling the language)
//! last for the session only.
//!
//! # Examples
//!
//! ```no_run
//! use carnelli_marine::app::config;
//!
//! let (config, warning) = config::load(None);
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("{:?}", config.language());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::site::{LanguageTag, SectionId};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// UI language code (`zh` or `en`, region suffixes accepted).
    pub language: Option<String>,

    /// Section shown at startup (`home`, `services`, `about`, `contact`).
    pub start_section: Option<String>,
}

/// Window settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

// =============================================================================
// Config
// =============================================================================

/// Parsed contents of `settings.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub window: WindowConfig,
}

impl Config {
    /// Configured language, if it names a supported one.
    #[must_use]
    pub fn language(&self) -> Option<LanguageTag> {
        self.general
            .language
            .as_deref()
            .and_then(LanguageTag::from_code)
    }

    /// Configured start section. Unknown identifiers resolve to home.
    #[must_use]
    pub fn start_section(&self) -> Option<SectionId> {
        self.general.start_section.as_deref().map(SectionId::resolve)
    }

    /// Initial window size, clamped to the supported minimum.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        let width = self
            .window
            .width
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH);
        let height = self
            .window
            .height
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT);
        (width, height)
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the resolved config directory.
///
/// `config_dir` is the `--config-dir` override, if any. Returns a tuple of
/// (config, optional_warning): a missing file silently yields the defaults,
/// an unreadable or malformed one yields the defaults plus a warning.
#[must_use]
pub fn load(config_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = paths::config_dir(config_dir).map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if
/// it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.language(), None);
        assert_eq!(config.start_section(), None);
        assert_eq!(
            config.window_size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[general]\nlanguage = \"en\"\nstart_section = \"about\"\n\n[window]\nwidth = 1024\nheight = 700\n",
        )
        .expect("write file");

        let config = load_from_path(&path).expect("valid config");

        assert_eq!(config.language(), Some(LanguageTag::En));
        assert_eq!(config.start_section(), Some(SectionId::About));
        assert_eq!(config.window_size(), (1024, 700));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[window]\nwidth = 900\n").expect("valid toml");
        assert_eq!(config.window_size(), (900, DEFAULT_WINDOW_HEIGHT));
        assert_eq!(config.general, GeneralConfig::default());
    }

    #[test]
    fn unknown_start_section_resolves_home() {
        let config: Config =
            toml::from_str("[general]\nstart_section = \"careers\"\n").expect("valid toml");
        assert_eq!(config.start_section(), Some(SectionId::Home));
    }

    #[test]
    fn unsupported_language_is_ignored() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("valid toml");
        assert_eq!(config.language(), None);
    }

    #[test]
    fn tiny_window_is_clamped() {
        let config: Config =
            toml::from_str("[window]\nwidth = 10\nheight = 10\n").expect("valid toml");
        assert_eq!(config.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("write file");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nlanguage = ").expect("write file");

        let (config, warning) = load(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_some(), "should warn about parse error");
        assert!(warning.unwrap().contains(CONFIG_FILE));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn wrong_value_type_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[window]\nwidth = \"wide\"\n").expect("write file");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }
}
