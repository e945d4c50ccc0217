//! Preference storage, theme resolution and configuration for ui-store
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - The persisted preference store read at startup
//! - Theme resolution

pub mod app_config;
pub mod config_file;
pub mod keys;
pub mod paths;
pub mod preferences;
pub mod theme;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{StoredThemeResolver, Theme, ThemeResolver};
