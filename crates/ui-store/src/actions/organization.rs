//! Organization actions

use crate::state::Organization;

/// Actions on the organization list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizationAction {
    /// Rename the organization with `id`; unknown ids are ignored
    Rename { id: String, name: String },
    /// Replace the whole list
    Replace(Vec<Organization>),
}
