//! Application State

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Organization, OrganizationList, Role, Session};

/// Feature flag name to enabled flag
pub type FeatureFlags = Arc<BTreeMap<String, bool>>;

/// Global session and UI state
///
/// Nested containers are reference counted. Cloning the state is cheap and a
/// transition only allocates the branches it replaces; every other branch
/// stays pointer-equal to the previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub dark_mode: bool,
    pub logged_in: bool,
    pub sidebar_collapsed: bool,
    pub current_version: String,
    pub latest_version: String,
    pub feature_flags: FeatureFlags,
    /// Set once the current version check fails; never cleared
    pub current_version_error: bool,
    /// Set once the latest version check fails; never cleared
    pub latest_version_error: bool,
    /// Present iff a user is authenticated
    pub session: Option<Arc<Session>>,
    pub user_fetching: bool,
    pub user_fetch_error: bool,
    pub organizations: Option<OrganizationList>,
    pub role: Option<Role>,
}

impl AppState {
    /// Organizations as a slice, empty when none were loaded
    pub fn organization_list(&self) -> &[Organization] {
        self.organizations.as_deref().map(Vec::as_slice).unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            logged_in: false,
            sidebar_collapsed: false,
            current_version: String::new(),
            latest_version: String::new(),
            feature_flags: FeatureFlags::default(),
            current_version_error: false,
            latest_version_error: false,
            session: None,
            // profile is fetched right after start
            user_fetching: true,
            user_fetch_error: false,
            organizations: None,
            role: None,
        }
    }
}
