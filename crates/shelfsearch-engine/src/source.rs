//! The snapshot collaborator boundary.

use std::future::Future;

use shelfsearch_core::{Item, StoreSource};

use crate::error::SourceError;

/// Supplies point-in-time item and store snapshots to the engine.
///
/// Both fetches must be all-or-nothing: a partial snapshot would make
/// orphan classification and ranking unreliable, so implementations return
/// an error instead of a truncated list. Each call returns a reasonably
/// fresh, internally consistent snapshot; the engine performs no caching
/// and never mutates what it receives. Freshness, retries and timeouts are
/// the implementation's business, not the engine's.
pub trait CatalogSource: Send + Sync {
    /// Fetch the full current item snapshot, including soft-deleted items
    /// (the engine filters those itself).
    fn fetch_all_items(&self) -> impl Future<Output = Result<Vec<Item>, SourceError>> + Send;

    /// Fetch the full current snapshot of stores eligible for discovery.
    /// Upstream has already filtered to approved/active stores.
    fn fetch_all_approved_stores(
        &self,
    ) -> impl Future<Output = Result<Vec<StoreSource>, SourceError>> + Send;
}

/// A [`CatalogSource`] backed by in-memory vectors.
///
/// The canonical source for tests and for callers that already hold a
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    items: Vec<Item>,
    stores: Vec<StoreSource>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(items: Vec<Item>, stores: Vec<StoreSource>) -> Self {
        Self { items, stores }
    }
}

impl CatalogSource for InMemorySource {
    async fn fetch_all_items(&self) -> Result<Vec<Item>, SourceError> {
        Ok(self.items.clone())
    }

    async fn fetch_all_approved_stores(&self) -> Result<Vec<StoreSource>, SourceError> {
        Ok(self.stores.clone())
    }
}
