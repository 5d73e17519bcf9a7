//! Domain error types.
//!
//! Permission evaluation is fail-closed and infallible: a grant that cannot
//! match simply does not match. These errors only cover construction-time
//! misuse of the model itself.

use thiserror::Error;

/// Domain-specific errors for the authorization model.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A grant is structurally invalid (e.g. empty matcher field name).
    #[error("invalid grant: {message}")]
    InvalidGrant { message: String },

    /// A principal is structurally invalid.
    #[error("invalid principal: {message}")]
    InvalidPrincipal { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
