//! Grants: declarative read-authorization rules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::model::{Principal, Resource};

/// The subject condition of a grant.
///
/// A closed variant set evaluated by exhaustive match; a new matcher kind is
/// a compile-time-checked extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectMatcher {
    /// Matches every principal, including the anonymous one.
    Everyone,
    /// Matches principals holding the named group membership.
    Group(String),
    /// Attribute-dependent matcher: matches an entity principal whose id
    /// equals the candidate resource's own value for `field`.
    FieldValue { field: String },
}

impl SubjectMatcher {
    /// Decides whether this matcher applies to `principal` for `resource`.
    ///
    /// Field-value matchers read the candidate resource's own attributes;
    /// there is no separate lookup. Anything unmatchable is a plain `false`.
    pub fn matches(&self, principal: &Principal, resource: &Resource) -> bool {
        match self {
            SubjectMatcher::Everyone => true,
            SubjectMatcher::Group(group) => match principal {
                Principal::Group(membership) => membership == group,
                Principal::Everyone | Principal::Entity { .. } => false,
            },
            SubjectMatcher::FieldValue { field } => match principal {
                Principal::Entity { id, .. } => resource
                    .attribute(field)
                    .and_then(|value| value.as_str())
                    .is_some_and(|value| value == id),
                Principal::Everyone | Principal::Group(_) => false,
            },
        }
    }
}

/// A declarative rule permitting read access to resources and/or fields for
/// principals matching a subject condition.
///
/// Grants are plain read-only records loaded fresh per request. `types` and
/// `fields` are optional restrictions: `None` means unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// Who this grant applies to.
    pub who: SubjectMatcher,
    /// Whether matching principals may know the resource exists.
    #[serde(default)]
    pub may_read_resource: bool,
    /// Whether this grant contributes field-level allowances at all.
    #[serde(default)]
    pub may_read_fields: bool,
    /// Content types the grant is limited to; `None` applies to all types.
    #[serde(default)]
    pub types: Option<HashSet<String>>,
    /// Fields the grant allows when `may_read_fields` is set; `None` allows
    /// every field of the resource.
    #[serde(default)]
    pub fields: Option<HashSet<String>>,
}

impl Grant {
    /// Creates a grant for the given subject with no permissions and no
    /// restrictions.
    pub fn new(who: SubjectMatcher) -> Self {
        Self {
            who,
            may_read_resource: false,
            may_read_fields: false,
            types: None,
            fields: None,
        }
    }

    /// Enables resource-existence visibility.
    pub fn allow_resource(mut self) -> Self {
        self.may_read_resource = true;
        self
    }

    /// Enables field-level allowances.
    pub fn allow_fields(mut self) -> Self {
        self.may_read_fields = true;
        self
    }

    /// Restricts the grant to the listed content types.
    pub fn restrict_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts the grant's field allowance to the listed fields.
    pub fn restrict_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the grant's type restriction admits `resource_type`.
    pub fn applies_to_type(&self, resource_type: &str) -> bool {
        match &self.types {
            Some(types) => types.contains(resource_type),
            None => true,
        }
    }

    /// Validates the grant's structure.
    pub fn validate(&self) -> DomainResult<()> {
        match &self.who {
            SubjectMatcher::Group(group) if group.is_empty() => {
                return Err(DomainError::InvalidGrant {
                    message: "group matcher requires a group id".to_string(),
                });
            }
            SubjectMatcher::FieldValue { field } if field.is_empty() => {
                return Err(DomainError::InvalidGrant {
                    message: "field-value matcher requires a field name".to_string(),
                });
            }
            _ => {}
        }
        if let Some(types) = &self.types {
            if types.iter().any(String::is_empty) {
                return Err(DomainError::InvalidGrant {
                    message: "type restriction contains an empty type id".to_string(),
                });
            }
        }
        if let Some(fields) = &self.fields {
            if fields.iter().any(String::is_empty) {
                return Err(DomainError::InvalidGrant {
                    message: "field restriction contains an empty field id".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Resource {
        Resource::new("posts", "1")
            .with_attribute("title", "Grand Opening")
            .with_attribute("subtitle", "Doors at nine")
    }

    #[test]
    fn everyone_matcher_matches_all_principals() {
        let matcher = SubjectMatcher::Everyone;
        let resource = post();
        assert!(matcher.matches(&Principal::Everyone, &resource));
        assert!(matcher.matches(&Principal::group("editors"), &resource));
        assert!(matcher.matches(&Principal::entity("test-users", "alice"), &resource));
    }

    #[test]
    fn group_matcher_requires_equal_membership() {
        let matcher = SubjectMatcher::Group("editors".to_string());
        let resource = post();
        assert!(matcher.matches(&Principal::group("editors"), &resource));
        assert!(!matcher.matches(&Principal::group("writers"), &resource));
        assert!(!matcher.matches(&Principal::Everyone, &resource));
        assert!(!matcher.matches(&Principal::entity("test-users", "editors"), &resource));
    }

    #[test]
    fn field_value_matcher_compares_principal_id_to_resource_attribute() {
        let matcher = SubjectMatcher::FieldValue {
            field: "subtitle".to_string(),
        };
        let resource = post();
        assert!(matcher.matches(&Principal::entity("test-users", "Doors at nine"), &resource));
        assert!(!matcher.matches(&Principal::entity("test-users", "someone else"), &resource));
        assert!(!matcher.matches(&Principal::Everyone, &resource));
    }

    #[test]
    fn field_value_matcher_misses_absent_and_non_string_attributes() {
        let matcher = SubjectMatcher::FieldValue {
            field: "rating".to_string(),
        };
        let resource = post().with_attribute("rating", 5);
        assert!(!matcher.matches(&Principal::entity("test-users", "5"), &resource));

        let matcher = SubjectMatcher::FieldValue {
            field: "missing".to_string(),
        };
        assert!(!matcher.matches(&Principal::entity("test-users", "anything"), &post()));
    }

    #[test]
    fn type_restriction_defaults_to_all_types() {
        let grant = Grant::new(SubjectMatcher::Everyone).allow_resource();
        assert!(grant.applies_to_type("posts"));
        assert!(grant.applies_to_type("authors"));

        let grant = grant.restrict_types(["posts"]);
        assert!(grant.applies_to_type("posts"));
        assert!(!grant.applies_to_type("authors"));
    }

    #[test]
    fn validate_rejects_empty_matcher_names() {
        let grant = Grant::new(SubjectMatcher::FieldValue {
            field: String::new(),
        });
        assert!(grant.validate().is_err());

        let grant = Grant::new(SubjectMatcher::Group(String::new()));
        assert!(grant.validate().is_err());

        let grant = Grant::new(SubjectMatcher::Everyone).restrict_fields([""]);
        assert!(grant.validate().is_err());
    }
}
