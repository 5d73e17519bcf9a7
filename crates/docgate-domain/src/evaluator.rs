//! Grant evaluation.
//!
//! Computes the effective permission set for one (principal, resource) pair
//! by matching the applicable grants and unioning their allowances. Pure and
//! infallible: a grant that cannot match contributes nothing.

use std::collections::HashSet;

use crate::model::{Grant, Principal, Resource};

/// The effective permissions of one principal on one resource.
///
/// Computed fresh per request, never persisted. `allowed_fields` is empty
/// whenever the resource itself is not visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSet {
    resource_visible: bool,
    allowed_fields: HashSet<String>,
}

impl PermissionSet {
    /// The all-denying permission set.
    pub fn denied() -> Self {
        Self {
            resource_visible: false,
            allowed_fields: HashSet::new(),
        }
    }

    /// Whether the principal may know the resource exists.
    pub fn resource_visible(&self) -> bool {
        self.resource_visible
    }

    /// Whether the named attribute or relationship may be shown.
    pub fn field_allowed(&self, name: &str) -> bool {
        self.resource_visible && self.allowed_fields.contains(name)
    }

    /// The full set of allowed field names.
    pub fn allowed_fields(&self) -> &HashSet<String> {
        &self.allowed_fields
    }
}

/// Evaluates `grants` for `principal` against `resource`.
///
/// Resource visibility is the OR of `may_read_resource` over the
/// subject-matching grants whose type restriction admits the resource.
/// Field allowances are the union over those grants with `may_read_fields`
/// set; a grant without an explicit field list allows every field the
/// resource carries. Visibility and field allowances may come from
/// different grants.
pub fn evaluate(principal: &Principal, resource: &Resource, grants: &[Grant]) -> PermissionSet {
    let mut resource_visible = false;
    let mut allowed_fields = HashSet::new();

    for grant in grants {
        if !grant.applies_to_type(&resource.resource_type) {
            continue;
        }
        if !grant.who.matches(principal, resource) {
            continue;
        }
        resource_visible |= grant.may_read_resource;
        if grant.may_read_fields {
            match &grant.fields {
                Some(fields) => allowed_fields.extend(fields.iter().cloned()),
                None => allowed_fields.extend(resource.field_names().map(str::to_string)),
            }
        }
    }

    if !resource_visible {
        return PermissionSet::denied();
    }
    PermissionSet {
        resource_visible,
        allowed_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RelatedRef, Relationship, SubjectMatcher};

    fn post() -> Resource {
        Resource::new("posts", "1")
            .with_attribute("title", "Grand Opening")
            .with_attribute("subtitle", "Doors at nine")
            .with_relationship(
                "author",
                Relationship::BelongsTo(RelatedRef::new("authors", "9")),
            )
    }

    #[test]
    fn zero_grants_denies_everything() {
        let permissions = evaluate(&Principal::Everyone, &post(), &[]);
        assert!(!permissions.resource_visible());
        assert!(permissions.allowed_fields().is_empty());
    }

    #[test]
    fn unrestricted_everyone_grant_allows_every_field() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone)
            .allow_resource()
            .allow_fields()];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert!(permissions.resource_visible());
        assert!(permissions.field_allowed("title"));
        assert!(permissions.field_allowed("subtitle"));
        assert!(permissions.field_allowed("author"));
    }

    #[test]
    fn non_matching_type_restriction_behaves_like_no_grant() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone)
            .allow_resource()
            .allow_fields()
            .restrict_types(["fields"])];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert_eq!(permissions, PermissionSet::denied());
    }

    #[test]
    fn explicit_field_list_limits_allowances() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone)
            .allow_resource()
            .allow_fields()
            .restrict_fields(["title"])];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert!(permissions.resource_visible());
        assert!(permissions.field_allowed("title"));
        assert!(!permissions.field_allowed("subtitle"));
        assert!(!permissions.field_allowed("author"));
    }

    #[test]
    fn visibility_without_field_grant_yields_no_fields() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone).allow_resource()];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert!(permissions.resource_visible());
        assert!(permissions.allowed_fields().is_empty());
    }

    #[test]
    fn field_grant_without_visibility_is_forced_empty() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone).allow_fields()];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert!(!permissions.resource_visible());
        assert!(permissions.allowed_fields().is_empty());
        assert!(!permissions.field_allowed("title"));
    }

    #[test]
    fn visibility_and_fields_may_come_from_different_grants() {
        let grants = vec![
            Grant::new(SubjectMatcher::Everyone).allow_resource(),
            Grant::new(SubjectMatcher::Everyone)
                .allow_fields()
                .restrict_fields(["title"]),
        ];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert!(permissions.resource_visible());
        assert!(permissions.field_allowed("title"));
        assert!(!permissions.field_allowed("subtitle"));
    }

    #[test]
    fn field_allowances_union_across_grants() {
        let grants = vec![
            Grant::new(SubjectMatcher::Everyone)
                .allow_resource()
                .allow_fields()
                .restrict_fields(["title"]),
            Grant::new(SubjectMatcher::Everyone)
                .allow_fields()
                .restrict_fields(["author"]),
        ];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        assert!(permissions.field_allowed("title"));
        assert!(permissions.field_allowed("author"));
        assert!(!permissions.field_allowed("subtitle"));
    }

    #[test]
    fn attribute_dependent_grant_reads_the_candidate_resource() {
        let grants = vec![Grant::new(SubjectMatcher::FieldValue {
            field: "subtitle".to_string(),
        })
        .allow_resource()
        .allow_fields()];

        let matching = Principal::entity("test-users", "Doors at nine");
        let permissions = evaluate(&matching, &post(), &grants);
        assert!(permissions.resource_visible());
        assert!(permissions.field_allowed("title"));

        let other = Principal::entity("test-users", "someone else");
        let permissions = evaluate(&other, &post(), &grants);
        assert!(!permissions.resource_visible());
    }
}
