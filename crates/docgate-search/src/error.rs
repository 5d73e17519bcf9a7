//! Orchestrator error types.

use thiserror::Error;

use docgate_storage::StorageError;

/// Errors surfaced by the fetch/search orchestrators.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The resource does not exist or the principal may not know it exists.
    /// The two cases are indistinguishable by contract.
    #[error("resource not found: {resource_type}/{id}")]
    NotFound { resource_type: String, id: String },

    /// An upstream storage failure, propagated unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SearchError {
    /// Creates the uniform missing/denied outcome.
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// Result type for orchestrator operations.
pub type SearchResult<T> = Result<T, SearchError>;
