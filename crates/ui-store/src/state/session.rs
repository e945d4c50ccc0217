//! Authenticated session

use serde::{Deserialize, Serialize};

/// Identity and credentials of the authenticated user
///
/// Profile fields stay empty until the profile has been loaded; a session
/// restored from cached credentials only carries the tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: String,
    pub access_jwt: String,
    pub refresh_jwt: String,
}

impl Session {
    /// Session with credentials only
    pub fn with_tokens(access_jwt: impl Into<String>, refresh_jwt: impl Into<String>) -> Self {
        Self {
            access_jwt: access_jwt.into(),
            refresh_jwt: refresh_jwt.into(),
            ..Self::default()
        }
    }
}
