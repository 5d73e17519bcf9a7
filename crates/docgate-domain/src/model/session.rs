//! Request principals.

use serde::{Deserialize, Serialize};

/// The identity a request is made on behalf of.
///
/// Constructed once per request and never mutated. `Everyone` is the
/// well-known anonymous principal; it is an explicit variant rather than a
/// magic group id so that matching it is a compile-time-checked case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Principal {
    /// The universal anonymous principal.
    Everyone,
    /// Membership in a named group.
    Group(String),
    /// A concrete authenticated identity (e.g. "test-users"/"alice").
    Entity { entity_type: String, id: String },
}

impl Principal {
    /// Creates a concrete entity principal.
    pub fn entity(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Entity {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates a group principal.
    pub fn group(id: impl Into<String>) -> Self {
        Self::Group(id.into())
    }

    /// Returns the identifying id for entity and group principals.
    pub fn id(&self) -> Option<&str> {
        match self {
            Principal::Everyone => None,
            Principal::Group(id) => Some(id),
            Principal::Entity { id, .. } => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_principal_carries_type_and_id() {
        let principal = Principal::entity("test-users", "alice");
        assert_eq!(
            principal,
            Principal::Entity {
                entity_type: "test-users".to_string(),
                id: "alice".to_string(),
            }
        );
        assert_eq!(principal.id(), Some("alice"));
    }

    #[test]
    fn everyone_has_no_identifying_id() {
        assert_eq!(Principal::Everyone.id(), None);
    }

    #[test]
    fn group_id_is_the_group_name() {
        assert_eq!(Principal::group("editors").id(), Some("editors"));
    }
}
