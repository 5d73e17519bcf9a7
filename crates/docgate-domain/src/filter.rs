//! Document filtering.
//!
//! Applies an effective permission set to a candidate resource, producing
//! the sanitized document or signaling total denial.

use crate::evaluator::PermissionSet;
use crate::model::{Document, Resource};

/// Filters `resource` against `permissions`.
///
/// Returns `None` when the resource is not visible at all. Otherwise the
/// document keeps `id` and `type` and only the allowed attributes and
/// relationships; unauthorized fields are absent from the output, not
/// nulled. Deterministic for equal inputs.
pub fn filter_document(resource: &Resource, permissions: &PermissionSet) -> Option<Document> {
    if !permissions.resource_visible() {
        return None;
    }

    let attributes = resource
        .attributes
        .iter()
        .filter(|(name, _)| permissions.field_allowed(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    let relationships = resource
        .relationships
        .iter()
        .filter(|(name, _)| permissions.field_allowed(name))
        .map(|(name, relationship)| (name.clone(), relationship.clone()))
        .collect();

    Some(Document {
        resource_type: resource.resource_type.clone(),
        id: resource.id.clone(),
        attributes,
        relationships,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::model::{Grant, Principal, RelatedRef, Relationship, SubjectMatcher};

    fn post() -> Resource {
        Resource::new("posts", "1")
            .with_attribute("title", "Grand Opening")
            .with_attribute("subtitle", "Doors at nine")
            .with_relationship(
                "author",
                Relationship::BelongsTo(RelatedRef::new("authors", "9")),
            )
            .with_relationship(
                "tags",
                Relationship::HasMany(vec![
                    RelatedRef::new("tags", "events"),
                    RelatedRef::new("tags", "news"),
                ]),
            )
    }

    #[test]
    fn invisible_resource_filters_to_none() {
        assert_eq!(filter_document(&post(), &PermissionSet::denied()), None);
    }

    #[test]
    fn visible_resource_without_field_grant_keeps_only_id_and_type() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone).allow_resource()];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        let document = filter_document(&post(), &permissions).unwrap();
        assert_eq!(document.resource_type, "posts");
        assert_eq!(document.id, "1");
        assert!(document.attributes.is_empty());
        assert!(document.relationships.is_empty());
    }

    #[test]
    fn unauthorized_fields_are_absent_not_null() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone)
            .allow_resource()
            .allow_fields()
            .restrict_fields(["title", "tags"])];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        let document = filter_document(&post(), &permissions).unwrap();

        assert!(document.attribute("title").is_some());
        assert!(document.attribute("subtitle").is_none());
        assert!(document.relationship("tags").is_some());
        assert!(document.relationship("author").is_none());

        let json = serde_json::to_value(&document).unwrap();
        assert!(json["attributes"].get("subtitle").is_none());
        assert!(json["relationships"].get("author").is_none());
    }

    #[test]
    fn full_field_grant_passes_everything_through() {
        let grants = vec![Grant::new(SubjectMatcher::Everyone)
            .allow_resource()
            .allow_fields()];
        let permissions = evaluate(&Principal::Everyone, &post(), &grants);
        let document = filter_document(&post(), &permissions).unwrap();
        assert_eq!(document.attributes, post().attributes);
        assert_eq!(document.relationships, post().relationships);
    }
}
