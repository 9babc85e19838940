//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.  The only thing
//! that crosses the boundary is a [`FormatConfig`] built from the values
//! here.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SALESDESK_*`)
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use salesdesk_core::domain::FormatConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Record storage settings.
    pub storage: StorageConfig,
    /// Display formatting settings.
    pub format: FormatSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON record store.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Date display pattern, strftime notation.
    pub date_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            date_format: FormatConfig::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).  A `--config` path that does not exist
    /// is an error; a missing default file is not.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(config_file.is_some()))
            .add_source(config::Environment::with_prefix("SALESDESK").separator("__"))
            .build()?;

        // serde(default) fills anything the file and environment left out.
        let cfg: AppConfig = settings.try_deserialize()?;
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.salesdesk.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "salesdesk", "salesdesk")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".salesdesk.toml"))
    }

    /// The formatting configuration handed to the core binders.
    pub fn format_config(&self) -> FormatConfig {
        FormatConfig::new(self.format.date_format.clone())
    }
}

/// Default location of the JSON record store.
fn default_store_path() -> PathBuf {
    directories::ProjectDirs::from("com", "salesdesk", "salesdesk")
        .map(|d| d.data_dir().join("records.json"))
        .unwrap_or_else(|| PathBuf::from("salesdesk-records.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_date_format_is_day_first() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.format.date_format, "%d/%m/%Y");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn format_config_uses_configured_pattern() {
        let mut cfg = AppConfig::default();
        cfg.format.date_format = "%Y-%m-%d".into();
        assert_eq!(cfg.format_config().date_format(), "%Y-%m-%d");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
