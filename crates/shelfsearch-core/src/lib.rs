//! Domain types and configuration for the shelfsearch item-discovery engine.

pub mod config;
pub mod item;
pub mod result;
pub mod store;

pub use config::{
    load_search_config, load_search_config_from_env, ConfigError, SearchConfig,
};
pub use item::Item;
pub use result::SearchResult;
pub use store::{Coordinates, StoreRecord, StoreSource};
