//! Item-discovery engine.
//!
//! Given a free-text query and an optional requester location, finds
//! matching items across independently-managed stores, reconciles
//! inconsistent store identifiers, attaches geodesic distance, and returns
//! a deterministically ranked, capped result list.
//!
//! Entry point: [`SearchEngine::search`]. Snapshot access goes through the
//! [`CatalogSource`] trait; the engine itself holds no state between
//! queries and performs no caching.

pub mod assemble;
pub mod error;
pub mod geo;
pub mod matcher;
pub mod rank;
pub mod reconcile;
pub mod search;
pub mod source;

pub use error::{EngineError, SourceError};
pub use reconcile::StoreTable;
pub use search::SearchEngine;
pub use source::{CatalogSource, InMemorySource};
