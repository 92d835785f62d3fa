//! Configuration file support for cancer-predict.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/cancer-predict/config.toml` (lowest priority)
//! - Project-local: `.cancer-predict.toml` (searched up directory tree)
//! - CLI flags and environment (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

/// Name of the project-local config file.
const PROJECT_CONFIG: &str = ".cancer-predict.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Model settings.
    pub model: ModelConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
}

/// Model configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the classifier weights.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Missing files are silently ignored. Unreadable files and invalid
    /// values are logged as warnings and dropped.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            warn!("Ignoring invalid configuration: {e}");
            return Self::default();
        }

        config
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref host) = self.server.host {
            if host.trim().is_empty() {
                return Err("server.host must not be empty".to_string());
            }
        }
        if self.server.port == Some(0) {
            return Err("server.port must be between 1 and 65535".to_string());
        }
        if let Some(ref path) = self.model.path {
            if path.as_os_str().is_empty() {
                return Err("model.path must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.server.host = other.server.host.or_else(|| self.server.host.take());
        self.server.port = other.server.port.or(self.server.port);
        self.model.path = other.model.path.or_else(|| self.model.path.take());
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cancer-predict").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for the project config in `start` and its ancestors.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG))
        .find(|candidate| candidate.is_file())
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
