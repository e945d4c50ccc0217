//! Session Reducer
//!
//! Handles credentials, profile loading, role and organization membership.

use std::sync::Arc;

use crate::actions::SessionAction;
use crate::state::{organization, AppState, Organization, Session};

/// Reduce session actions
pub fn reduce_session(mut state: AppState, action: &SessionAction) -> AppState {
    match action {
        SessionAction::SetTokens(patch) => {
            state.session = Some(Arc::new(patch.to_session()));
        }

        SessionAction::SetFetching(fetching) => {
            state.user_fetching = *fetching;
        }

        SessionAction::SetFetchError(failed) => {
            state.user_fetch_error = *failed;
        }

        SessionAction::SetOrgRole(org_role) => {
            if let Some(role) = org_role.role {
                state.role = role;
            }
            if let Some(organizations) = &org_role.organizations {
                state.organizations = organizations.clone().map(Arc::new);
            }
        }

        SessionAction::SetProfile(profile) => {
            // Credentials of an existing session survive the profile load
            let base = state.session.as_deref().cloned().unwrap_or_default();
            state.session = Some(Arc::new(Session {
                user_id: profile.user_id.clone(),
                email: profile.email.clone(),
                name: profile.name.clone(),
                profile_picture_url: profile.profile_picture_url.clone(),
                ..base
            }));

            // The profile only knows the org id and name; the entry is
            // overwritten with placeholders for everything else.
            let replacement = Organization::placeholder(&profile.org_id, &profile.org_name);
            let organizations = organization::upsert(state.organization_list(), replacement);
            state.organizations = Some(Arc::new(organizations));

            state.role = profile.role;
        }
    }
    state
}
