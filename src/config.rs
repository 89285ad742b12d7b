//! Configuration management
//!
//! Load and save user preferences to a TOML config file.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::panels::RenderStyle;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub panels: PanelPreferences,
    pub host: HostPreferences,
    pub logging: LoggingPreferences,
}

impl Config {
    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Write this configuration to the user config file if none exists yet
    pub fn save_if_missing(&self) -> Result<bool> {
        self.save_if_missing_to(&Self::config_path()?)
    }

    /// Write to `path` unless a file is already there; returns whether it wrote
    pub fn save_if_missing_to(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        self.save_to(path)?;
        Ok(true)
    }

    /// Save configuration to `path`, replacing any existing file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = Self::project_dirs() {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            // Fallback to current directory
            Ok(PathBuf::from("artpanels.toml"))
        }
    }

    /// Log file location, unless overridden in `[logging]`
    pub fn log_path(&self) -> PathBuf {
        if let Some(ref file) = self.logging.file {
            return file.clone();
        }
        match Self::project_dirs() {
            Some(proj_dirs) => proj_dirs.data_local_dir().join("artpanels.log"),
            None => PathBuf::from("artpanels.log"),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "artpanels", "artpanels")
    }
}

/// Panel defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelPreferences {
    pub default_render_style: RenderStyle,
}

impl Default for PanelPreferences {
    fn default() -> Self {
        Self {
            default_render_style: RenderStyle::Solid,
        }
    }
}

/// Demo host behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostPreferences {
    /// How long the loopback dispatcher holds each request
    pub latency_ms: u64,
    /// Maximum number of entries kept in the activity log
    pub activity_limit: usize,
}

impl Default for HostPreferences {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            activity_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// `tracing` filter directive, e.g. "info" or "artpanels=debug"
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
