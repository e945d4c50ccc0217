//! Application configuration
//!
//! Configuration loaded from `.ui-store.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Theme;

/// Application configuration loaded from `.ui-store.toml`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Forces a theme instead of the one stored in preferences
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Explicit location of the preference file
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
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

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
