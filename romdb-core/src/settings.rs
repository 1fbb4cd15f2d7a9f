//! User settings file (`~/.config/romdb/settings.toml`).
//!
//! Every value is optional. Command-line flags take priority, then the
//! settings file, then the built-in defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RomDbError;
use crate::render::Dialect;
use crate::title::DEFAULT_ART_URL;

/// Database file used when neither the command line nor settings name one.
pub const DEFAULT_DATABASE: &str = "mupen64plus.ini";

/// Output folder used when neither the command line nor settings name one.
pub const DEFAULT_OUT_DIR: &str = "Pages";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: Option<PathBuf>,
    pub wiki: WikiSettings,
}

/// `[wiki]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WikiSettings {
    pub out: Option<PathBuf>,
    pub dialect: Option<Dialect>,
    pub art_url: Option<String>,
}

impl Settings {
    /// Database path: CLI override, then settings, then `mupen64plus.ini`.
    pub fn database_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Output folder: CLI override, then settings, then `Pages`.
    pub fn out_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.wiki.out.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn dialect(&self, cli_override: Option<Dialect>) -> Dialect {
        cli_override.or(self.wiki.dialect).unwrap_or_default()
    }

    pub fn art_url(&self, cli_override: Option<String>) -> String {
        cli_override
            .or_else(|| self.wiki.art_url.clone())
            .unwrap_or_else(|| DEFAULT_ART_URL.to_string())
    }
}

/// Canonical path to the settings file: `~/.config/romdb/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romdb").join("settings.toml")
}

/// Load settings from the canonical path. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, RomDbError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, RomDbError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents)
        .map_err(|e| RomDbError::settings(format!("{}: {e}", path.display())))
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
