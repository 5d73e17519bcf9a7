//! In-memory storage implementation.
//!
//! Backs the integration tests and embedded use. Uses DashMap for
//! thread-safe concurrent access without explicit locks; rows are kept in
//! insertion order so `candidates` has a stable storage ordering.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::instrument;

use async_trait::async_trait;

use docgate_domain::{Grant, Resource};

use crate::error::{StorageError, StorageResult};
use crate::mapper::{row_to_resource, Row};
use crate::query::Query;
use crate::schema::FieldDescriptor;
use crate::traits::{validate_branch_name, validate_resource_id, validate_type_name, DataStore};

/// Branch metadata.
#[derive(Debug, Clone)]
pub struct Branch {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A raw row awaiting schema-driven mapping.
#[derive(Debug, Clone)]
struct StoredRow {
    resource_type: String,
    id: String,
    row: Row,
}

/// In-memory implementation of [`DataStore`].
///
/// # Performance Characteristics
///
/// - **Row/grant writes**: O(N) per branch (ordered `Vec` scan for replace)
/// - **Resource fetch**: O(N) where N is rows in the branch
/// - **Branch operations**: O(1) (DashMap lookup)
///
/// The content-type registry is store-global rather than per branch,
/// matching the schema collaborator's contract.
#[derive(Debug, Default)]
pub struct MemoryDataStore {
    branches: DashMap<String, Branch>,
    content_types: DashMap<String, Vec<FieldDescriptor>>,
    /// Rows per branch, in insertion order.
    rows: DashMap<String, Vec<StoredRow>>,
    /// Grants per branch, in insertion order.
    grants: DashMap<String, Vec<Grant>>,
}

impl MemoryDataStore {
    /// Creates a new in-memory data store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory data store wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Creates a branch.
    #[instrument(skip(self))]
    pub fn create_branch(&self, name: &str) -> StorageResult<Branch> {
        validate_branch_name(name)?;

        let branch = Branch {
            name: name.to_string(),
            created_at: Utc::now(),
        };

        // Atomic entry API avoids a race between the existence check and
        // the insert.
        use dashmap::mapref::entry::Entry;
        match self.branches.entry(name.to_string()) {
            Entry::Occupied(_) => {
                return Err(StorageError::BranchAlreadyExists {
                    branch: name.to_string(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(branch.clone());
            }
        }

        self.rows.entry(name.to_string()).or_default();
        self.grants.entry(name.to_string()).or_default();

        Ok(branch)
    }

    /// Registers a content type's declared fields, replacing any previous
    /// declaration.
    pub fn put_content_type(
        &self,
        resource_type: &str,
        fields: Vec<FieldDescriptor>,
    ) -> StorageResult<()> {
        validate_type_name(resource_type)?;
        if fields.iter().any(|field| field.id.is_empty()) {
            return Err(StorageError::InvalidInput {
                message: "field descriptor id cannot be empty".to_string(),
            });
        }
        self.content_types.insert(resource_type.to_string(), fields);
        Ok(())
    }

    /// Stores a raw row for a resource. An existing row with the same type
    /// and id is replaced in place, keeping its position.
    #[instrument(skip(self, row), fields(branch = %branch, resource_type = %resource_type, id = %id))]
    pub fn put_row(
        &self,
        branch: &str,
        resource_type: &str,
        id: &str,
        row: Row,
    ) -> StorageResult<()> {
        validate_type_name(resource_type)?;
        validate_resource_id(id)?;
        if !self.content_types.contains_key(resource_type) {
            return Err(StorageError::ContentTypeNotFound {
                resource_type: resource_type.to_string(),
            });
        }

        let mut rows = self
            .rows
            .get_mut(branch)
            .ok_or_else(|| StorageError::BranchNotFound {
                branch: branch.to_string(),
            })?;
        let stored = StoredRow {
            resource_type: resource_type.to_string(),
            id: id.to_string(),
            row,
        };
        match rows
            .iter_mut()
            .find(|existing| existing.resource_type == resource_type && existing.id == id)
        {
            Some(existing) => *existing = stored,
            None => rows.push(stored),
        }
        Ok(())
    }

    /// Adds a grant to a branch.
    #[instrument(skip(self, grant), fields(branch = %branch))]
    pub fn put_grant(&self, branch: &str, grant: Grant) -> StorageResult<()> {
        grant
            .validate()
            .map_err(|err| StorageError::InvalidInput {
                message: err.to_string(),
            })?;
        let mut grants = self
            .grants
            .get_mut(branch)
            .ok_or_else(|| StorageError::BranchNotFound {
                branch: branch.to_string(),
            })?;
        grants.push(grant);
        Ok(())
    }

    /// Gets branch metadata.
    pub fn branch(&self, name: &str) -> StorageResult<Branch> {
        self.branches
            .get(name)
            .map(|branch| branch.value().clone())
            .ok_or_else(|| StorageError::BranchNotFound {
                branch: name.to_string(),
            })
    }

    fn fields_for(&self, resource_type: &str) -> StorageResult<Vec<FieldDescriptor>> {
        self.content_types
            .get(resource_type)
            .map(|fields| fields.value().clone())
            .ok_or_else(|| StorageError::ContentTypeNotFound {
                resource_type: resource_type.to_string(),
            })
    }

    fn map_row(&self, stored: &StoredRow) -> StorageResult<Resource> {
        let fields = self.fields_for(&stored.resource_type)?;
        Ok(row_to_resource(
            &stored.resource_type,
            &stored.id,
            &stored.row,
            &fields,
        ))
    }
}

#[async_trait]
impl DataStore for MemoryDataStore {
    async fn resource(
        &self,
        branch: &str,
        resource_type: &str,
        id: &str,
    ) -> StorageResult<Resource> {
        let rows = self
            .rows
            .get(branch)
            .ok_or_else(|| StorageError::BranchNotFound {
                branch: branch.to_string(),
            })?;
        let stored = rows
            .iter()
            .find(|stored| stored.resource_type == resource_type && stored.id == id)
            .cloned()
            .ok_or_else(|| StorageError::ResourceNotFound {
                resource_type: resource_type.to_string(),
                id: id.to_string(),
            })?;
        drop(rows);
        self.map_row(&stored)
    }

    async fn candidates(&self, branch: &str, query: &Query) -> StorageResult<Vec<Resource>> {
        let stored: Vec<StoredRow> = self
            .rows
            .get(branch)
            .ok_or_else(|| StorageError::BranchNotFound {
                branch: branch.to_string(),
            })?
            .iter()
            .cloned()
            .collect();
        let mut candidates = Vec::new();
        for row in &stored {
            let resource = self.map_row(row)?;
            if query.matches(&resource) {
                candidates.push(resource);
            }
        }
        Ok(candidates)
    }

    async fn grants(&self, branch: &str) -> StorageResult<Vec<Grant>> {
        self.grants
            .get(branch)
            .map(|grants| grants.value().clone())
            .ok_or_else(|| StorageError::BranchNotFound {
                branch: branch.to_string(),
            })
    }

    async fn content_type_fields(
        &self,
        resource_type: &str,
    ) -> StorageResult<Vec<FieldDescriptor>> {
        self.fields_for(resource_type)
    }
}
