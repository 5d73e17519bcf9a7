//! DataStore trait definition.

use async_trait::async_trait;

use docgate_domain::{Grant, Resource};

use crate::error::{StorageError, StorageResult};
use crate::query::Query;
use crate::schema::FieldDescriptor;

/// Abstract storage interface the orchestrators evaluate against.
///
/// Implementations must be thread-safe (Send + Sync) and support async
/// operations. Every method is a fresh read; the contract assumes no
/// caching between calls.
#[async_trait]
pub trait DataStore: Send + Sync + 'static {
    /// Fetches one resource by type and id within a branch.
    ///
    /// Absence is reported as [`StorageError::ResourceNotFound`]; the caller
    /// decides how that surfaces.
    async fn resource(
        &self,
        branch: &str,
        resource_type: &str,
        id: &str,
    ) -> StorageResult<Resource>;

    /// Executes a structural query, returning the full candidate set in
    /// storage order. Pagination happens in the caller, after authorization
    /// filtering.
    async fn candidates(&self, branch: &str, query: &Query) -> StorageResult<Vec<Resource>>;

    /// Loads every grant defined on a branch.
    async fn grants(&self, branch: &str) -> StorageResult<Vec<Grant>>;

    /// Returns the declared fields of a content type, in declaration order.
    async fn content_type_fields(&self, resource_type: &str)
        -> StorageResult<Vec<FieldDescriptor>>;
}

/// Validates a branch name.
pub(crate) fn validate_branch_name(branch: &str) -> StorageResult<()> {
    if branch.is_empty() {
        return Err(StorageError::InvalidInput {
            message: "branch name cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Validates a content-type id.
pub(crate) fn validate_type_name(resource_type: &str) -> StorageResult<()> {
    if resource_type.is_empty() {
        return Err(StorageError::InvalidInput {
            message: "content type cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Validates a resource id.
pub(crate) fn validate_resource_id(id: &str) -> StorageResult<()> {
    if id.is_empty() {
        return Err(StorageError::InvalidInput {
            message: "resource id cannot be empty".to_string(),
        });
    }
    Ok(())
}
