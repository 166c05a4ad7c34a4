//! Application configuration
//!
//! Configuration loaded from `.cloud-storage-store.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a successful update is folded into the listed records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// The list is replaced by the single updated record
    #[default]
    ReplaceList,
    /// The record with the same id is swapped in place, the rest is kept
    MergeById,
}

/// Application configuration loaded from `.cloud-storage-store.toml`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// What happens to the listed records when an update succeeds
    #[serde(default)]
    pub update_strategy: UpdateStrategy,

    /// Install the logging middleware on the store
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,
}

fn default_log_actions() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            update_strategy: UpdateStrategy::default(),
            log_actions: default_log_actions(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
