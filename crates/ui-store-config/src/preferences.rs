//! Persisted preferences
//!
//! A flat string key/value store read once at startup to seed the initial
//! application state. The file-backed store keeps its values in
//! `~/.config/ui-store/preferences.toml` unless `AppConfig::preferences_file`
//! points elsewhere.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{paths, AppConfig};

const PREFERENCES_VERSION: u32 = 1;

/// Keyed lookups into persisted preferences
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when absent
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Preference file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// On-disk preference file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesFile {
    meta: PreferencesMeta,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self {
            meta: PreferencesMeta {
                last_modified: Utc::now(),
                version: PREFERENCES_VERSION,
            },
            values: BTreeMap::new(),
        }
    }
}

/// TOML file backed preference store
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    file: PreferencesFile,
}

impl FilePreferenceStore {
    /// Open the preference file named by `config`, or the default location
    ///
    /// A missing file yields an empty store. An unreadable or unparsable
    /// file is logged and also yields an empty store, so startup never fails
    /// on a damaged preference file.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let path = match &config.preferences_file {
            Some(path) => path.clone(),
            None => paths::preferences_path()?,
        };

        if !path.exists() {
            log::info!("No preference file at {:?}, using defaults", path);
            return Ok(Self::empty(path));
        }

        match Self::load_from_path(&path) {
            Ok(store) => Ok(store),
            Err(e) => {
                log::warn!("Ignoring preference file {:?}: {:#}", path, e);
                Ok(Self::empty(path))
            }
        }
    }

    /// Load preferences from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preference file: {:?}", path))?;
        let file: PreferencesFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse preference file: {:?}", path))?;
        log::info!("Loaded {} preferences from {:?}", file.values.len(), path);
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            file: PreferencesFile::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.file.values.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.file.values.remove(key)
    }

    /// Write the preferences back to their file
    pub fn save(&mut self) -> Result<()> {
        self.file.meta.last_modified = Utc::now();

        let content =
            toml::to_string_pretty(&self.file).context("Failed to serialize preferences")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preference file: {:?}", self.path))?;

        log::info!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    fn config_for(path: &Path) -> AppConfig {
        AppConfig {
            preferences_file: Some(path.to_path_buf()),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_memory_store() {
        let prefs = MemoryPreferenceStore::new().with(keys::IS_LOGGED_IN, "true");
        assert_eq!(prefs.get(keys::IS_LOGGED_IN).as_deref(), Some("true"));
        assert_eq!(prefs.get(keys::AUTH_TOKEN), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let prefs = FilePreferenceStore::open(&config_for(&path)).unwrap();
        assert_eq!(prefs.path(), path);
        assert_eq!(prefs.get(keys::IS_LOGGED_IN), None);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut prefs = FilePreferenceStore::open(&config_for(&path)).unwrap();
        prefs.set(keys::IS_SIDEBAR_COLLAPSED, "true");
        prefs.set(keys::AUTH_TOKEN, "access");
        prefs.save().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[meta]"));
        assert!(content.contains("[values]"));

        let reloaded = FilePreferenceStore::open(&config_for(&path)).unwrap();
        assert_eq!(
            reloaded.get(keys::IS_SIDEBAR_COLLAPSED).as_deref(),
            Some("true")
        );
        assert_eq!(reloaded.get(keys::AUTH_TOKEN).as_deref(), Some("access"));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = FilePreferenceStore::open(&config_for(&path)).unwrap();
        prefs.set(keys::AUTH_TOKEN, "access");
        assert_eq!(prefs.remove(keys::AUTH_TOKEN).as_deref(), Some("access"));
        assert_eq!(prefs.get(keys::AUTH_TOKEN), None);
    }

    #[test]
    fn test_damaged_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        assert!(FilePreferenceStore::load_from_path(&path).is_err());

        let prefs = FilePreferenceStore::open(&config_for(&path)).unwrap();
        assert_eq!(prefs.get(keys::IS_LOGGED_IN), None);
    }
}
