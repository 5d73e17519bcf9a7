//! Search result envelope.

use serde::{Deserialize, Serialize};

use docgate_domain::Document;

/// Pagination metadata, recomputed after authorization filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Count of documents that survived filtering, not the raw candidate
    /// count.
    pub total: usize,
}

/// Result-set metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub page: PageMeta,
}

/// The outcome of a collection search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Surviving documents in storage order.
    pub data: Vec<Document>,
    pub meta: ResponseMeta,
}

impl SearchResponse {
    /// Wraps filtered documents with metadata for `total`.
    pub fn new(data: Vec<Document>, total: usize) -> Self {
        Self {
            data,
            meta: ResponseMeta {
                page: PageMeta { total },
            },
        }
    }
}
