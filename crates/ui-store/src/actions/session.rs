//! Session actions
//!
//! Actions for credentials, profile loading and organization membership.

use serde::{Deserialize, Deserializer};

use crate::state::{Organization, Role, Session};

/// Actions for the authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Start a new session from the supplied fields; missing fields are empty
    SetTokens(SessionPatch),
    /// Profile request in flight
    SetFetching(bool),
    /// Profile request failed
    SetFetchError(bool),
    /// Role and organizations resolved together
    SetOrgRole(OrgRole),
    /// Profile loaded
    SetProfile(UserProfile),
}

/// Subset of session fields; `None` fields fall back to empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionPatch {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
    pub access_jwt: Option<String>,
    pub refresh_jwt: Option<String>,
}

impl SessionPatch {
    /// Patch carrying only the credential pair
    pub fn tokens(access_jwt: impl Into<String>, refresh_jwt: impl Into<String>) -> Self {
        Self {
            access_jwt: Some(access_jwt.into()),
            refresh_jwt: Some(refresh_jwt.into()),
            ..Self::default()
        }
    }

    /// Empty session overridden by the fields this patch carries
    pub fn to_session(&self) -> Session {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        Session {
            user_id: field(&self.user_id),
            email: field(&self.email),
            name: field(&self.name),
            profile_picture_url: field(&self.profile_picture_url),
            access_jwt: field(&self.access_jwt),
            refresh_jwt: field(&self.refresh_jwt),
        }
    }
}

/// Loaded user profile with the organization it was loaded for
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: String,
    #[serde(rename = "ROLE")]
    pub role: Option<Role>,
    pub org_id: String,
    pub org_name: String,
}

/// The only state fields `SessionAction::SetOrgRole` may touch
///
/// Outer `None`: key absent, field left as is. `Some(None)`: explicit
/// `null`, field cleared. `Some(Some(_))`: field replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrgRole {
    #[serde(deserialize_with = "present")]
    pub role: Option<Option<Role>>,
    #[serde(rename = "org", deserialize_with = "present")]
    pub organizations: Option<Option<Vec<Organization>>>,
}

/// Marks a key that appeared in the payload, even with a `null` value
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
