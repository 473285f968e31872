//! Configuration module
//!
//! Settings come from `.parfum/config.toml` (searched upwards from the
//! current directory), then `~/.parfum/config.toml`, then defaults.
//! Command-line flags and their environment fallbacks override the file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/chat/completions";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub consultant: ConsultantConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data").join("parfums.json")
}

/// Completion service settings, handed to the consultation client as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultantConfig {
    /// API key (usually supplied through DEEPSEEK_API_KEY instead)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Chat completions endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Temperature for tasks that do not pin their own
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language the consultant answers in
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ConsultantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_language() -> String {
    "English".to_string()
}

impl ConsultantConfig {
    /// Apply explicit overrides (flags or environment); blank values are ignored
    pub fn with_overrides(mut self, api_key: Option<&str>, api_url: Option<&str>) -> Self {
        if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            self.api_key = Some(key.to_string());
        }
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_url = url.to_string();
        }
        self
    }
}

impl Config {
    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // relative catalog paths are relative to the directory holding .parfum/
        if config.catalog.path.is_relative() {
            if let Some(root) = path.parent().and_then(Path::parent) {
                if !root.as_os_str().is_empty() {
                    config.catalog.path = root.join(&config.catalog.path);
                }
            }
        }

        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find local .parfum/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(".parfum").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Get global config path (~/.parfum/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::UserDirs::new().map(|u| u.home_dir().join(".parfum").join("config.toml"))
    }

    /// Catalog file with priority:
    /// 1. Explicit override (--catalog / PARFUM_CATALOG)
    /// 2. catalog.path from the loaded config
    pub fn catalog_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.catalog.path.clone(),
        }
    }
}
