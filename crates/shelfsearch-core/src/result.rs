use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::store::StoreRecord;

/// One ranked hit: an item joined to its resolved store.
///
/// Built fresh for every query and never mutated after construction.
/// `distance_km` is absent when the caller supplied no location or the
/// store has no usable coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub item: Item,
    pub store: StoreRecord,
    pub distance_km: Option<f64>,
}
