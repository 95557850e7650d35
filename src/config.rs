//! Configuration Management
//!
//! Handles persistent configuration storage for cfasg.

use crate::logging::LogLevel;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read access to the API root every repository builds its URLs from
pub trait EndpointReader: Send + Sync {
    fn api_endpoint(&self) -> String;
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Cloud controller API root, e.g. `https://api.example.com`
    #[serde(default)]
    pub api_endpoint: Option<String>,
    /// Bearer token sent with every request
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Build a configuration pointing at the given API root
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            api_endpoint: Some(endpoint.to_string()),
            ..Self::default()
        }
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cfasg").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is
    /// missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}

impl EndpointReader for Config {
    fn api_endpoint(&self) -> String {
        self.api_endpoint
            .as_deref()
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string()
    }
}
