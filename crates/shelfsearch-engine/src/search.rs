//! The query pipeline: fetch, reconcile, match, assemble, rank.

use shelfsearch_core::{Coordinates, SearchConfig, SearchResult};

use crate::assemble::assemble;
use crate::error::EngineError;
use crate::matcher;
use crate::rank::rank;
use crate::reconcile::StoreTable;
use crate::source::CatalogSource;

/// One engine instance per snapshot source.
///
/// Holds no per-query state: every call to [`SearchEngine::search`]
/// allocates its own lookup table and result buffer, so concurrent queries
/// never observe each other.
#[derive(Debug, Clone)]
pub struct SearchEngine<S> {
    source: S,
    config: SearchConfig,
}

impl<S: CatalogSource> SearchEngine<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(source: S, config: SearchConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one query and return the ranked, capped result list.
    ///
    /// Empty or whitespace-only queries short-circuit to an empty list
    /// before any snapshot is fetched. Otherwise the item and store
    /// snapshots are fetched concurrently and joined, the store table is
    /// built once, and matched items flow through assembly and ranking.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DataAccess`] when either snapshot fetch
    /// fails. There are no partial results and no internal retries.
    pub async fn search(
        &self,
        query: &str,
        requester_location: Option<Coordinates>,
    ) -> Result<Vec<SearchResult>, EngineError> {
        let Some(normalized_query) = matcher::normalize_query(query) else {
            tracing::debug!("empty query, returning no results");
            return Ok(Vec::new());
        };

        let (items, stores) = tokio::try_join!(
            self.source.fetch_all_items(),
            self.source.fetch_all_approved_stores()
        )?;
        let item_count = items.len();

        let table = StoreTable::build(stores);
        let matched: Vec<_> = items
            .into_iter()
            .filter(|item| matcher::matches(&normalized_query, item))
            .collect();
        let matched_count = matched.len();

        let mut results = assemble(matched, &table, requester_location);
        let assembled_count = results.len();
        rank(&mut results, &self.config);

        tracing::debug!(
            query = %normalized_query,
            items = item_count,
            stores = table.len(),
            matched = matched_count,
            assembled = assembled_count,
            returned = results.len(),
            "search complete"
        );
        Ok(results)
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
