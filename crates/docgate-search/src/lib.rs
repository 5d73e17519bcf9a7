//! docgate-search: Fetch and search orchestration
//!
//! This crate drives the grant evaluator and document filter over storage
//! results:
//! - `get` for a single resource, where unauthorized and nonexistent are
//!   deliberately the same outcome
//! - `search` for a collection, where denials shrink the result set and its
//!   reported total
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               docgate-search                 │
//! ├─────────────────────────────────────────────┤
//! │  searchers.rs - get/search orchestrators    │
//! │  response.rs  - search result envelope      │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod response;
pub mod searchers;

// Re-export commonly used types
pub use error::{SearchError, SearchResult};
pub use response::{PageMeta, ResponseMeta, SearchResponse};
pub use searchers::Searchers;
