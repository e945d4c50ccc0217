//! Theme resolution
//!
//! The active theme is read once at startup. A theme forced in the app
//! config wins over the stored preference; without either, dark mode is used.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::PreferenceStore;

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "darkMode")]
    Dark,
    #[serde(rename = "lightMode")]
    Light,
}

impl Theme {
    /// Stored identifier of the dark theme
    pub const DARK_MODE: &'static str = "darkMode";
    /// Stored identifier of the light theme
    pub const LIGHT_MODE: &'static str = "lightMode";

    /// Parse a stored theme identifier
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            Self::DARK_MODE => Some(Self::Dark),
            Self::LIGHT_MODE => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Dark => Self::DARK_MODE,
            Self::Light => Self::LIGHT_MODE,
        }
    }
}

/// Source of the active theme
pub trait ThemeResolver {
    fn resolve(&self) -> Theme;
}

/// Resolves the theme from the preference store, with an optional override
pub struct StoredThemeResolver<'a> {
    prefs: &'a dyn PreferenceStore,
    forced: Option<Theme>,
}

impl<'a> StoredThemeResolver<'a> {
    pub fn new(prefs: &'a dyn PreferenceStore) -> Self {
        Self { prefs, forced: None }
    }

    /// Use `theme` regardless of the stored preference (e.g. from `AppConfig::theme`)
    pub fn with_override(mut self, theme: Option<Theme>) -> Self {
        self.forced = theme;
        self
    }
}

impl ThemeResolver for StoredThemeResolver<'_> {
    fn resolve(&self) -> Theme {
        if let Some(theme) = self.forced {
            return theme;
        }

        match self.prefs.get(keys::THEME) {
            Some(stored) => Theme::from_key(&stored).unwrap_or_else(|| {
                log::warn!("Unknown stored theme {:?}, using dark mode", stored);
                Theme::Dark
            }),
            None => Theme::default(),
        }
    }
}
