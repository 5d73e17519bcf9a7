//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Branch not found.
    #[error("branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// Branch already exists.
    #[error("branch already exists: {branch}")]
    BranchAlreadyExists { branch: String },

    /// Resource not found within its branch and type.
    #[error("resource not found: {resource_type}/{id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// Content type has no registered schema.
    #[error("content type not found: {resource_type}")]
    ContentTypeNotFound { resource_type: String },

    /// Invalid input error.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Query execution error.
    #[error("query error: {message}")]
    QueryError { message: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
