//! Row-to-resource mapping.
//!
//! Converts a storage-native row into the attribute/relationship shape the
//! core consumes, driven by the content type's declared fields. Columns the
//! schema does not declare are dropped; a null or missing relationship
//! column emits no relationship at all.

use std::collections::BTreeMap;

use serde_json::Value;

use docgate_domain::{RelatedRef, Relationship, Resource};

use crate::schema::{FieldDescriptor, FieldKind, FieldType};

/// A storage-native row: column name to raw value.
pub type Row = BTreeMap<String, Value>;

/// Maps `row` into a [`Resource`] using the content type's field
/// descriptors.
pub fn row_to_resource(
    resource_type: &str,
    id: &str,
    row: &Row,
    fields: &[FieldDescriptor],
) -> Resource {
    let mut resource = Resource::new(resource_type, id);
    for field in fields {
        match &field.kind {
            FieldKind::Attribute(field_type) => {
                if let Some(value) = row.get(&field.id) {
                    resource
                        .attributes
                        .insert(field.id.clone(), coerce_value(value, *field_type));
                }
            }
            FieldKind::BelongsTo { related } => {
                if let Some(related_id) = row.get(&field.id).and_then(value_as_id) {
                    resource.relationships.insert(
                        field.id.clone(),
                        Relationship::BelongsTo(RelatedRef::new(
                            related.resource_type(),
                            related_id,
                        )),
                    );
                }
            }
            FieldKind::HasMany { related } => {
                if let Some(Value::Array(entries)) = row.get(&field.id) {
                    let refs: Vec<RelatedRef> = entries
                        .iter()
                        .filter_map(value_as_id)
                        .map(|related_id| RelatedRef::new(related.resource_type(), related_id))
                        .collect();
                    resource
                        .relationships
                        .insert(field.id.clone(), Relationship::HasMany(refs));
                }
            }
        }
    }
    resource
}

/// Coerces a raw column value to its declared attribute type.
///
/// Identity for every primitive kind; richer kinds will need real
/// conversions here when they are introduced.
fn coerce_value(value: &Value, field_type: FieldType) -> Value {
    match field_type {
        FieldType::String
        | FieldType::Boolean
        | FieldType::Date
        | FieldType::Integer
        | FieldType::Any => value.clone(),
    }
}

/// Reads a related-resource id out of a raw column value.
fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
