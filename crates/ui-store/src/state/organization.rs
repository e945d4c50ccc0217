//! Organizations the session belongs to
//!
//! The list keeps arrival order and is keyed by `Organization::id`, which is
//! unique within a list. Helpers here never modify their input; they return
//! a fresh vector for the caller to wrap in a new `Arc`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Shared, immutable organization list
pub type OrganizationList = Arc<Vec<Organization>>;

/// Tenant the session may belong to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub is_anonymous: bool,
    pub has_opted_updates: bool,
}

impl Organization {
    /// Record built from an id and a name only, with placeholder values elsewhere
    pub fn placeholder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: 0,
            is_anonymous: false,
            has_opted_updates: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizationError {
    #[error("organization `{id}` not found")]
    NotFound { id: String },
}

/// Index of the organization with `id`
pub fn position(organizations: &[Organization], id: &str) -> Option<usize> {
    organizations.iter().position(|org| org.id == id)
}

/// Replace the entry with the same id in place, or append when there is none
pub fn upsert(organizations: &[Organization], replacement: Organization) -> Vec<Organization> {
    let mut next = organizations.to_vec();
    match position(&next, &replacement.id) {
        Some(index) => next[index] = replacement,
        None => {
            log::debug!("Organization {} not in list, appending", replacement.id);
            next.push(replacement);
        }
    }
    next
}

/// Change the name of organization `id`, keeping its other fields
pub fn rename(
    organizations: &[Organization],
    id: &str,
    name: &str,
) -> Result<Vec<Organization>, OrganizationError> {
    let index = position(organizations, id).ok_or_else(|| OrganizationError::NotFound {
        id: id.to_string(),
    })?;

    let mut next = organizations.to_vec();
    next[index].name = name.to_string();
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn org(id: &str, name: &str, created_at: i64) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            created_at,
            is_anonymous: true,
            has_opted_updates: true,
        }
    }

    #[test]
    fn test_position() {
        let orgs = vec![org("a", "A", 1), org("b", "B", 2)];
        assert_eq!(position(&orgs, "b"), Some(1));
        assert_eq!(position(&orgs, "c"), None);
        assert_eq!(position(&[], "a"), None);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let orgs = vec![org("a", "A", 1), org("b", "B", 2), org("c", "C", 3)];
        let next = upsert(&orgs, Organization::placeholder("b", "Bee"));

        assert_eq!(next.len(), 3);
        assert_eq!(next[1], Organization::placeholder("b", "Bee"));
        assert_eq!(next[0], orgs[0]);
        assert_eq!(next[2], orgs[2]);
    }

    #[test]
    fn test_upsert_appends_unknown_id() {
        let orgs = vec![org("a", "A", 1)];
        let next = upsert(&orgs, Organization::placeholder("z", "Zed"));

        assert_eq!(next, vec![org("a", "A", 1), Organization::placeholder("z", "Zed")]);
    }

    #[test]
    fn test_rename_keeps_other_fields() {
        let orgs = vec![org("a", "Foo", 5)];
        let next = rename(&orgs, "a", "Bar").unwrap();

        assert_eq!(next, vec![org("a", "Bar", 5)]);
        // input untouched
        assert_eq!(orgs[0].name, "Foo");
    }

    #[test]
    fn test_rename_unknown_id() {
        let orgs = vec![org("a", "Foo", 5)];
        assert_eq!(
            rename(&orgs, "missing", "Bar"),
            Err(OrganizationError::NotFound {
                id: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_organization_wire_names() {
        let json = serde_json::to_value(org("a", "Foo", 5)).unwrap();
        assert_eq!(json["createdAt"], 5);
        assert_eq!(json["isAnonymous"], true);
        assert_eq!(json["hasOptedUpdates"], true);

        let parsed: Organization = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(parsed, Organization::placeholder("x", ""));
    }
}
