//! docgate-storage: Storage abstraction layer
//!
//! This crate provides the storage seam the orchestrators evaluate against:
//! - `DataStore` trait for fetching resources, candidates, grants, and schema
//! - In-memory implementation backing tests and embedded use
//! - Row-to-resource mapping driven by content-type field descriptors
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              docgate-storage                 │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs - DataStore trait definition     │
//! │  memory.rs - In-memory implementation       │
//! │  schema.rs - Content-type field descriptors │
//! │  mapper.rs - Row → Resource conversion      │
//! │  query.rs  - Structural candidate queries   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod mapper;
pub mod memory;
pub mod query;
pub mod schema;
pub mod traits;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use memory::MemoryDataStore;
pub use query::Query;
pub use schema::{FieldDescriptor, FieldKind, FieldType, RelatedTarget};
pub use traits::DataStore;
