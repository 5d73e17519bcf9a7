//! docgate-domain: Core read-authorization logic
//!
//! This crate contains the core authorization logic including:
//! - Principal and grant data model
//! - Grant evaluation into effective permission sets
//! - Document filtering against a permission set
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               docgate-domain                 │
//! ├─────────────────────────────────────────────┤
//! │  model/      - Principals, grants, resources │
//! │  evaluator   - Grant matching & permissions  │
//! │  filter      - Document field filtering      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Evaluation and filtering are pure, synchronous functions: absence of
//! permission is a normal result, never an error.

pub mod error;
pub mod evaluator;
pub mod filter;
pub mod model;

// Re-export commonly used types at the crate root
pub use error::{DomainError, DomainResult};
pub use evaluator::{evaluate, PermissionSet};
pub use filter::filter_document;
pub use model::{Document, Grant, Principal, RelatedRef, Relationship, Resource, SubjectMatcher};
