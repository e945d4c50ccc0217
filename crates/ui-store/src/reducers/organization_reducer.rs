//! Organization Reducer

use std::sync::Arc;

use crate::actions::OrganizationAction;
use crate::state::{organization, AppState};

/// Reduce organization list actions
pub fn reduce_organization(mut state: AppState, action: &OrganizationAction) -> AppState {
    match action {
        OrganizationAction::Rename { id, name } => {
            match organization::rename(state.organization_list(), id, name) {
                Ok(organizations) => {
                    state.organizations = Some(Arc::new(organizations));
                }
                Err(e) => {
                    log::warn!("Ignoring rename to {:?}: {}", name, e);
                }
            }
        }
        OrganizationAction::Replace(organizations) => {
            state.organizations = Some(Arc::new(organizations.clone()));
        }
    }
    state
}
