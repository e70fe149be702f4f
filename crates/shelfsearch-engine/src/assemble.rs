//! Joins matched items to their resolved stores.

use shelfsearch_core::{Coordinates, Item, SearchResult};

use crate::geo;
use crate::reconcile::StoreTable;

/// Build one [`SearchResult`] per matched item whose store resolves.
///
/// Items with an unresolvable store reference are dropped silently —
/// store/item drift is expected operational noise, logged at debug only.
/// Distance is attached when the caller supplied a location and the store
/// has usable coordinates; otherwise it stays `None` and the result sorts
/// into the distance-less bucket.
#[must_use]
pub fn assemble(
    matched: Vec<Item>,
    stores: &StoreTable,
    requester_location: Option<Coordinates>,
) -> Vec<SearchResult> {
    let mut results = Vec::with_capacity(matched.len());
    for item in matched {
        let Some(store) = stores.resolve(&item.store_id) else {
            tracing::debug!(
                item_id = %item.id,
                store_id = %item.store_id,
                "dropping item with unresolvable store reference"
            );
            continue;
        };
        let distance_km = match (requester_location, store.location) {
            (Some(from), Some(to)) => Some(geo::distance_km(from, to)),
            _ => None,
        };
        results.push(SearchResult {
            item,
            store: store.clone(),
            distance_km,
        });
    }
    results
}
