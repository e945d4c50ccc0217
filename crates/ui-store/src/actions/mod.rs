//! Actions module
//!
//! Actions describe something that happened and are folded into state by the
//! reducers. The root enum is tagged by domain; each domain enum carries its
//! own payload types.

pub mod decode;
pub mod kind;
pub mod organization;
pub mod session;
pub mod ui;
pub mod version;

use std::collections::BTreeMap;

pub use decode::{decode, decode_value, DecodeError};
pub use kind::ActionKind;
pub use organization::OrganizationAction;
pub use session::{OrgRole, SessionAction, SessionPatch, UserProfile};
pub use ui::UiAction;
pub use version::VersionAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Theme, login and sidebar flags
    Ui(UiAction),
    /// Version check results
    Version(VersionAction),
    /// Replace all feature flags
    FeatureFlags(BTreeMap<String, bool>),
    /// Credentials, profile and role
    Session(SessionAction),
    /// Organization list changes
    Organization(OrganizationAction),
    /// Action decoded from a tag this build does not know; never changes state
    Unknown(String),
}

impl Action {
    /// Tag of this action, `None` for `Action::Unknown`
    pub fn kind(&self) -> Option<ActionKind> {
        let kind = match self {
            Action::Ui(UiAction::ToggleDarkMode) => ActionKind::ToggleDarkMode,
            Action::Ui(UiAction::SetLoggedIn(_)) => ActionKind::SetLoggedIn,
            Action::Ui(UiAction::SetSidebarCollapsed(_)) => ActionKind::SetSidebarCollapsed,
            Action::Version(VersionAction::SetCurrent(_)) => ActionKind::SetCurrentVersion,
            Action::Version(VersionAction::SetLatest(_)) => ActionKind::SetLatestVersion,
            Action::Version(VersionAction::CurrentFailed) => ActionKind::SetCurrentVersionError,
            Action::Version(VersionAction::LatestFailed) => ActionKind::SetLatestVersionError,
            Action::FeatureFlags(_) => ActionKind::SetFeatureFlags,
            Action::Session(SessionAction::SetTokens(_)) => ActionKind::SetSessionTokens,
            Action::Session(SessionAction::SetFetching(_)) => ActionKind::SetUserFetching,
            Action::Session(SessionAction::SetFetchError(_)) => ActionKind::SetUserFetchError,
            Action::Session(SessionAction::SetOrgRole(_)) => ActionKind::SetUserOrgRole,
            Action::Session(SessionAction::SetProfile(_)) => ActionKind::SetUserProfile,
            Action::Organization(OrganizationAction::Rename { .. }) => {
                ActionKind::RenameOrganization
            }
            Action::Organization(OrganizationAction::Replace(_)) => ActionKind::SetOrganizations,
            Action::Unknown(_) => return None,
        };
        Some(kind)
    }

    /// Tag string for logging; unknown actions report the tag they arrived with
    pub fn tag(&self) -> &str {
        match (self, self.kind()) {
            (Action::Unknown(tag), _) => tag.as_str(),
            (_, Some(kind)) => <&'static str>::from(kind),
            (_, None) => "unknown",
        }
    }
}
