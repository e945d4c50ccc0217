//! Initial state assembly
//!
//! Seeds the first `AppState` from the persisted preferences and the theme
//! resolver. Each collaborator is read exactly once.

use anyhow::Result;
use std::sync::Arc;

use ui_store_config::{
    keys, AppConfig, FilePreferenceStore, PreferenceStore, StoredThemeResolver, Theme,
    ThemeResolver,
};

use crate::state::{AppState, Session};

/// Build the state the store starts with
pub fn initial_state(prefs: &dyn PreferenceStore, theme: &dyn ThemeResolver) -> AppState {
    let session = cached_session(prefs);
    if session.is_some() {
        log::info!("Restored session credentials from preferences");
    } else {
        log::info!("No cached session credentials");
    }

    AppState {
        dark_mode: theme.resolve() == Theme::Dark,
        logged_in: is_true(prefs, keys::IS_LOGGED_IN),
        sidebar_collapsed: is_true(prefs, keys::IS_SIDEBAR_COLLAPSED),
        session: session.map(Arc::new),
        ..AppState::default()
    }
}

/// Build the first state from the files named by `config`
///
/// Opens the preference file and resolves the theme, honouring the theme
/// forced in the app config.
pub fn bootstrap(config: &AppConfig) -> Result<AppState> {
    let prefs = FilePreferenceStore::open(config)?;
    log::info!("Bootstrapping state from {:?}", prefs.path());

    let theme = StoredThemeResolver::new(&prefs).with_override(config.theme);
    Ok(initial_state(&prefs, &theme))
}

fn is_true(prefs: &dyn PreferenceStore, key: &str) -> bool {
    prefs.get(key).as_deref() == Some("true")
}

/// Credentials-only session, when both tokens are cached
fn cached_session(prefs: &dyn PreferenceStore) -> Option<Session> {
    let access = prefs.get(keys::AUTH_TOKEN).filter(|t| !t.is_empty())?;
    let refresh = prefs.get(keys::REFRESH_AUTH_TOKEN).filter(|t| !t.is_empty())?;
    Some(Session::with_tokens(access, refresh))
}
