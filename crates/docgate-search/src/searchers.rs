//! The fetch and search orchestrators.

use std::sync::Arc;

use tracing::{debug, instrument};

use docgate_domain::{evaluate, filter_document, Document, Principal};
use docgate_storage::{DataStore, Query, StorageError};

use crate::error::{SearchError, SearchResult};
use crate::response::SearchResponse;

/// Entry point for authorized reads over a [`DataStore`].
///
/// Each request is independent: grants are loaded fresh per call and passed
/// explicitly into evaluation, so concurrent requests share no mutable
/// state.
pub struct Searchers<S> {
    store: Arc<S>,
}

impl<S> Clone for Searchers<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DataStore> Searchers<S> {
    /// Creates searchers over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches a single resource on behalf of `principal`.
    ///
    /// Fails with [`SearchError::NotFound`] both when storage has no such
    /// resource and when the principal may not see it; the caller cannot
    /// tell the cases apart. Other storage failures propagate unchanged.
    #[instrument(skip(self, principal), fields(branch = %branch, resource_type = %resource_type, id = %id))]
    pub async fn get(
        &self,
        principal: &Principal,
        branch: &str,
        resource_type: &str,
        id: &str,
    ) -> SearchResult<Document> {
        let resource = match self.store.resource(branch, resource_type, id).await {
            Ok(resource) => resource,
            Err(StorageError::ResourceNotFound { .. }) => {
                return Err(SearchError::not_found(resource_type, id));
            }
            Err(err) => return Err(err.into()),
        };

        let grants = self.store.grants(branch).await?;
        let permissions = evaluate(principal, &resource, &grants);
        match filter_document(&resource, &permissions) {
            Some(document) => Ok(document),
            None => {
                debug!("resource denied for principal");
                Err(SearchError::not_found(resource_type, id))
            }
        }
    }

    /// Runs a collection search on behalf of `principal`.
    ///
    /// Denied candidates are dropped, surviving documents keep the storage
    /// ordering, and `meta.page.total` counts the filtered result set. The
    /// page size is applied after filtering, so authorization never skews
    /// the reported total. Authorization can empty a search but never fail
    /// it.
    #[instrument(skip(self, principal, query), fields(branch = %branch))]
    pub async fn search(
        &self,
        principal: &Principal,
        branch: &str,
        query: &Query,
    ) -> SearchResult<SearchResponse> {
        let candidates = self.store.candidates(branch, query).await?;
        let grants = self.store.grants(branch).await?;

        let mut data = Vec::new();
        for resource in &candidates {
            let permissions = evaluate(principal, resource, &grants);
            if let Some(document) = filter_document(resource, &permissions) {
                data.push(document);
            }
        }
        let total = data.len();
        debug!(
            candidates = candidates.len(),
            total, "search filtered by authorization"
        );

        if let Some(page_size) = query.page_size {
            data.truncate(page_size);
        }
        Ok(SearchResponse::new(data, total))
    }
}
