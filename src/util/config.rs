//! Configuration file support for cmakegen.
//!
//! cmakegen supports two configuration file locations:
//! - Global: `~/.cmakegen/config.toml` - User-wide defaults
//! - Project: `.cmakegen/config.toml` in the working directory - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::HostPlatform;

/// Default file name of the generated descriptor.
pub const DEFAULT_DESCRIPTOR_NAME: &str = "CMakeLists.txt";

/// cmakegen configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation settings
    pub generate: GenerateConfig,
}

/// Generation-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenerateConfig {
    /// Host platform to generate for (linux, mac, win64)
    pub host: Option<String>,

    /// Default build model path
    pub model: Option<PathBuf>,

    /// Descriptor file name (default: CMakeLists.txt)
    pub file_name: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.generate.host.is_some() {
            self.generate.host = other.generate.host;
        }
        if other.generate.model.is_some() {
            self.generate.model = other.generate.model;
        }
        if other.generate.file_name.is_some() {
            self.generate.file_name = other.generate.file_name;
        }
    }

    /// Parse the host platform from the config string.
    pub fn host(&self) -> Result<Option<HostPlatform>> {
        self.generate
            .host
            .as_deref()
            .map(|s| s.parse::<HostPlatform>())
            .transpose()
            .context("invalid `generate.host` in config")
    }

    /// Get the descriptor file name.
    pub fn file_name(&self) -> &str {
        self.generate
            .file_name
            .as_deref()
            .unwrap_or(DEFAULT_DESCRIPTOR_NAME)
    }
}

/// Get the global cmakegen config directory (~/.cmakegen).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".cmakegen"))
}

/// Get the global config path (~/.cmakegen/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.cmakegen/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".cmakegen").join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.cmakegen/config.toml)
/// 2. Global config (~/.cmakegen/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    // Load global config first
    if let Some(global_path) = global_path {
        if global_path.exists() {
            config.merge(Config::load_or_default(global_path));
        }
    }

    // Project config overrides global
    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}
