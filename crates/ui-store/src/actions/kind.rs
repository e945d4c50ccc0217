//! Action tags
//!
//! Every action has a stable kebab-case tag. Tags name actions in logs and
//! select the variant when decoding actions from JSON.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ActionKind {
    ToggleDarkMode,
    SetLoggedIn,
    SetSidebarCollapsed,
    SetFeatureFlags,
    SetCurrentVersion,
    SetLatestVersion,
    SetCurrentVersionError,
    SetLatestVersionError,
    SetSessionTokens,
    SetUserFetching,
    SetUserFetchError,
    SetUserOrgRole,
    SetUserProfile,
    RenameOrganization,
    SetOrganizations,
}
