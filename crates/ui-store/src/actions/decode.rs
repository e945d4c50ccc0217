//! Decoding actions from JSON
//!
//! Actions produced outside this crate arrive as
//! `{"type": "<tag>", "payload": <value>}`. Unknown tags decode to
//! `Action::Unknown` so that newer producers never break older stores.
//! Missing payloads and missing payload fields fall back to empty values;
//! only a payload of the wrong JSON shape is rejected.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use super::{
    Action, ActionKind, OrgRole, OrganizationAction, SessionAction, SessionPatch, UiAction,
    UserProfile, VersionAction,
};
use crate::state::Organization;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed action envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("invalid payload for `{kind}`: {source}")]
    Payload {
        kind: ActionKind,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LoggedInPayload {
    is_logged_in: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CurrentVersionPayload {
    current_version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LatestVersionPayload {
    latest_version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserFetchingPayload {
    is_user_fetching: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserFetchErrorPayload {
    is_user_fetching_error: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RenameOrganizationPayload {
    org_id: String,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrganizationsPayload {
    org: Vec<Organization>,
}

/// Decode an action from a JSON string
pub fn decode(json: &str) -> Result<Action, DecodeError> {
    let envelope: Envelope = serde_json::from_str(json).map_err(DecodeError::Envelope)?;
    from_envelope(envelope)
}

/// Decode an action from an already parsed JSON value
pub fn decode_value(value: Value) -> Result<Action, DecodeError> {
    let envelope: Envelope = serde_json::from_value(value).map_err(DecodeError::Envelope)?;
    from_envelope(envelope)
}

/// Payload of `kind`; `null` means "all fields missing"
fn payload<T: DeserializeOwned + Default>(kind: ActionKind, value: Value) -> Result<T, DecodeError> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|source| DecodeError::Payload { kind, source })
}

fn from_envelope(envelope: Envelope) -> Result<Action, DecodeError> {
    let Ok(kind) = envelope.tag.parse::<ActionKind>() else {
        log::debug!("Decoded unknown action tag {:?}", envelope.tag);
        return Ok(Action::Unknown(envelope.tag));
    };
    let value = envelope.payload;

    let action = match kind {
        ActionKind::ToggleDarkMode => Action::Ui(UiAction::ToggleDarkMode),
        ActionKind::SetLoggedIn => {
            let p: LoggedInPayload = payload(kind, value)?;
            Action::Ui(UiAction::SetLoggedIn(p.is_logged_in))
        }
        ActionKind::SetSidebarCollapsed => {
            Action::Ui(UiAction::SetSidebarCollapsed(payload(kind, value)?))
        }
        ActionKind::SetFeatureFlags => {
            let flags: BTreeMap<String, bool> = payload(kind, value)?;
            Action::FeatureFlags(flags)
        }
        ActionKind::SetCurrentVersion => {
            let p: CurrentVersionPayload = payload(kind, value)?;
            Action::Version(VersionAction::SetCurrent(p.current_version))
        }
        ActionKind::SetLatestVersion => {
            let p: LatestVersionPayload = payload(kind, value)?;
            Action::Version(VersionAction::SetLatest(p.latest_version))
        }
        ActionKind::SetCurrentVersionError => Action::Version(VersionAction::CurrentFailed),
        ActionKind::SetLatestVersionError => Action::Version(VersionAction::LatestFailed),
        ActionKind::SetSessionTokens => {
            let patch: SessionPatch = payload(kind, value)?;
            Action::Session(SessionAction::SetTokens(patch))
        }
        ActionKind::SetUserFetching => {
            let p: UserFetchingPayload = payload(kind, value)?;
            Action::Session(SessionAction::SetFetching(p.is_user_fetching))
        }
        ActionKind::SetUserFetchError => {
            let p: UserFetchErrorPayload = payload(kind, value)?;
            Action::Session(SessionAction::SetFetchError(p.is_user_fetching_error))
        }
        ActionKind::SetUserOrgRole => {
            let org_role: OrgRole = payload(kind, value)?;
            Action::Session(SessionAction::SetOrgRole(org_role))
        }
        ActionKind::SetUserProfile => {
            let profile: UserProfile = payload(kind, value)?;
            Action::Session(SessionAction::SetProfile(profile))
        }
        ActionKind::RenameOrganization => {
            let p: RenameOrganizationPayload = payload(kind, value)?;
            Action::Organization(OrganizationAction::Rename {
                id: p.org_id,
                name: p.name,
            })
        }
        ActionKind::SetOrganizations => {
            let p: OrganizationsPayload = payload(kind, value)?;
            Action::Organization(OrganizationAction::Replace(p.org))
        }
    };

    Ok(action)
}
