//! Store identity reconciliation.
//!
//! Item records reference stores by raw ids that may carry a legacy
//! `virtual_` or `temp_` prefix, while the store snapshot is keyed by
//! canonical id. The table is built once per query (O(stores)) so each
//! item resolves in O(1) amortized instead of re-probing the snapshot per
//! prefix variant.

use std::collections::HashMap;

use shelfsearch_core::{Coordinates, StoreRecord, StoreSource};

/// Known raw-id prefixes, in resolution priority order. At most one prefix
/// ever applies to a given id.
const STORE_ID_PREFIXES: [&str; 2] = ["virtual_", "temp_"];

/// Per-query lookup table from canonical store id to normalized record.
///
/// Built fresh for every query; never shared across concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct StoreTable {
    records: HashMap<String, StoreRecord>,
}

impl StoreTable {
    /// Normalize a store snapshot into a table keyed by canonical id.
    ///
    /// Duplicate canonical ids keep the later record, matching snapshot
    /// order.
    #[must_use]
    pub fn build(sources: Vec<StoreSource>) -> Self {
        let mut records = HashMap::with_capacity(sources.len());
        for source in sources {
            let record = normalize_store(source);
            records.insert(record.id.clone(), record);
        }
        Self { records }
    }

    /// Resolve a raw store reference to its canonical record.
    ///
    /// Tries the raw id as-is, then retries with the single applicable
    /// known prefix stripped. `None` means the item is orphaned; callers
    /// drop it from results rather than treating it as an error.
    #[must_use]
    pub fn resolve(&self, raw_store_id: &str) -> Option<&StoreRecord> {
        if let Some(record) = self.records.get(raw_store_id) {
            return Some(record);
        }
        for prefix in STORE_ID_PREFIXES {
            if let Some(stripped) = raw_store_id.strip_prefix(prefix) {
                return self.records.get(stripped);
            }
        }
        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collapse the snapshot's heterogeneous field naming into one shape.
///
/// `name`/`address` win over the legacy `store_name`/`store_address`
/// spellings, empty strings count as absent, and the (0, 0) coordinate
/// sentinel (or missing coordinates) becomes `location: None`.
fn normalize_store(source: StoreSource) -> StoreRecord {
    let StoreSource {
        id,
        name,
        store_name,
        address,
        store_address,
        location,
        latitude,
        longitude,
        owner_id,
    } = source;

    let flat_location = match (latitude, longitude) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        _ => None,
    };

    StoreRecord {
        id,
        name: first_present(name, store_name),
        address: first_present(address, store_address),
        location: location.or(flat_location).filter(|c| !c.is_unset()),
        owner_id,
    }
}

fn first_present(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
        .unwrap_or_default()
}
