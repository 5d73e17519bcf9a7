//! Structural candidate queries.
//!
//! A query carries only structural predicates (type, attribute equality);
//! authorization is never the storage layer's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use docgate_domain::Resource;

/// A query over a resource collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Restrict candidates to one content type.
    #[serde(default)]
    pub type_filter: Option<String>,
    /// Attribute equality predicates, all of which must hold.
    #[serde(default)]
    pub attribute_filters: BTreeMap<String, Value>,
    /// Page size applied by the caller after authorization filtering; the
    /// storage layer returns the full candidate set.
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl Query {
    /// A query matching every resource of one content type.
    pub fn of_type(resource_type: impl Into<String>) -> Self {
        Self {
            type_filter: Some(resource_type.into()),
            ..Self::default()
        }
    }

    /// Adds an attribute equality predicate.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attribute_filters.insert(name.into(), value.into());
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Whether `resource` satisfies the structural predicates.
    pub fn matches(&self, resource: &Resource) -> bool {
        if let Some(type_filter) = &self.type_filter {
            if resource.resource_type != *type_filter {
                return false;
            }
        }
        self.attribute_filters
            .iter()
            .all(|(name, value)| resource.attribute(name) == Some(value))
    }
}
