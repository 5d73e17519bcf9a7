//! Content-type field descriptors.
//!
//! The schema registry itself is an external collaborator; these are the
//! descriptor records it hands back, consumed by the row mapper.

use serde::{Deserialize, Serialize};

/// Declared type of an attribute field. Value coercion is identity for all
/// of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Boolean,
    Date,
    Integer,
    Any,
}

/// The declared target of a relationship field.
///
/// A tagged union rather than a bare type string: a relationship targeting
/// several declared types becomes a new variant instead of a special case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelatedTarget {
    /// The relationship targets exactly one declared content type.
    Single(String),
}

impl RelatedTarget {
    /// The declared content type of related resources.
    pub fn resource_type(&self) -> &str {
        match self {
            RelatedTarget::Single(resource_type) => resource_type,
        }
    }
}

/// What kind of field a descriptor declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// A plain attribute of the given declared type.
    Attribute(FieldType),
    /// A to-one relationship.
    BelongsTo { related: RelatedTarget },
    /// A to-many relationship.
    HasMany { related: RelatedTarget },
}

/// A field declared on a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The field id, which is also the attribute/relationship name.
    pub id: String,
    /// The declared kind of the field.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Declares an attribute field.
    pub fn attribute(id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::Attribute(field_type),
        }
    }

    /// Declares a to-one relationship field.
    pub fn belongs_to(id: impl Into<String>, related_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::BelongsTo {
                related: RelatedTarget::Single(related_type.into()),
            },
        }
    }

    /// Declares a to-many relationship field.
    pub fn has_many(id: impl Into<String>, related_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::HasMany {
                related: RelatedTarget::Single(related_type.into()),
            },
        }
    }

    /// Whether the field is relationship-kind rather than attribute-kind.
    pub fn is_relationship(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::BelongsTo { .. } | FieldKind::HasMany { .. }
        )
    }
}
