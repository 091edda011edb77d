//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_EMPTY_COLOR, DEFAULT_OUTPUT_PATH,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE,
};
use crate::models::RgbColor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Where the payload comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Apps Script endpoint URL
    pub api_url: Option<String>,
    /// Spreadsheet id passed as `?id=`
    pub sheet_id: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            sheet_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where and how the document is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output HTML file
    pub path: PathBuf,
    /// Document title
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Neutral background for quarters without a usable color
    pub empty_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty_color: DEFAULT_EMPTY_COLOR.to_hex(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PeriodicSamples/config.toml`
/// - macOS: `~/Library/Application Support/PeriodicSamples/config.toml`
/// - Windows: `%APPDATA%\PeriodicSamples\config.toml`
///
/// The directory can be overridden with `PERIODIC_SAMPLES_CONFIG_DIR`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Payload source
    pub source: SourceConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Rendering settings
    pub render: RenderConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory.
    ///
    /// `PERIODIC_SAMPLES_CONFIG_DIR` wins over the platform directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Resolves the config file, preferring an explicit `--config` path.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file_path(),
        }
    }

    /// Loads configuration from `path`.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        debug!(path = %path.display(), "Saved config file");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `api_url` (if set) is an http(s) URL
    /// - `timeout_secs` is positive
    /// - `title` is not blank
    /// - `empty_color` is a hex color
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.source.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("API URL must start with http:// or https://: {url}");
            }
        }

        if self.source.timeout_secs == 0 {
            anyhow::bail!("Timeout must be at least 1 second");
        }

        if self.output.title.trim().is_empty() {
            anyhow::bail!("Title cannot be empty");
        }

        self.empty_color()?;

        Ok(())
    }

    /// Parses the configured neutral color.
    pub fn empty_color(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.render.empty_color).context("Invalid render.empty_color")
    }
}
