//! Candidate resources and filtered documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reference to a related resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelatedRef {
    /// The content type of the related resource.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The id of the related resource.
    pub id: String,
}

impl RelatedRef {
    /// Creates a new related-resource reference.
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// A relationship value on a resource.
///
/// A belongs-to field carries exactly one reference, a has-many field an
/// ordered list. Cardinality is a closed variant set so new relationship
/// shapes are compile-time-checked extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relationship {
    /// A single related resource.
    BelongsTo(RelatedRef),
    /// An ordered list of related resources.
    HasMany(Vec<RelatedRef>),
}

/// A typed, identified candidate document: the unit of authorization.
///
/// Attribute and relationship maps are ordered (`BTreeMap`) so that equal
/// inputs serialize byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The content type (e.g. "posts").
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The resource id within its type.
    pub id: String,
    /// Attribute name to value.
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    /// Relationship name to related reference(s).
    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,
}

impl Resource {
    /// Creates a resource with no attributes or relationships.
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            attributes: BTreeMap::new(),
            relationships: BTreeMap::new(),
        }
    }

    /// Adds an attribute value, replacing any existing value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Adds a relationship, replacing any existing value.
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    /// Returns the attribute value for `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Iterates over every attribute and relationship name the resource
    /// carries.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .keys()
            .chain(self.relationships.keys())
            .map(String::as_str)
    }
}

/// The sanitized output of filtering a [`Resource`] against a permission set.
///
/// `id` and `type` are always present; unauthorized fields are absent from
/// the maps entirely, never present with a null value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The content type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The resource id.
    pub id: String,
    /// Authorized attributes only.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
    /// Authorized relationships only.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
}

impl Document {
    /// Returns the attribute value for `name`, if authorized and present.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns the relationship for `name`, if authorized and present.
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }
}
