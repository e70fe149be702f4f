//! File-backed snapshot source for the CLI.

use std::path::{Path, PathBuf};

use shelfsearch_core::{Item, StoreSource};
use shelfsearch_engine::{CatalogSource, SourceError};

/// Reads item and store snapshots from two JSON files, each holding a
/// top-level array. Every fetch re-reads the file, matching the engine's
/// fresh-snapshot-per-query contract.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    items_path: PathBuf,
    stores_path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(items_path: PathBuf, stores_path: PathBuf) -> Self {
        Self {
            items_path,
            stores_path,
        }
    }

    async fn read_snapshot(path: &Path, what: &'static str) -> Result<String, SourceError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SourceError::Fetch {
                what,
                reason: format!("{}: {e}", path.display()),
            })
    }
}

impl CatalogSource for JsonFileSource {
    async fn fetch_all_items(&self) -> Result<Vec<Item>, SourceError> {
        let raw = Self::read_snapshot(&self.items_path, "items").await?;
        let items: Vec<Item> = serde_json::from_str(&raw).map_err(|source| {
            SourceError::Malformed {
                what: "items",
                source,
            }
        })?;
        tracing::debug!(count = items.len(), path = %self.items_path.display(), "loaded item snapshot");
        Ok(items)
    }

    async fn fetch_all_approved_stores(&self) -> Result<Vec<StoreSource>, SourceError> {
        let raw = Self::read_snapshot(&self.stores_path, "stores").await?;
        let stores: Vec<StoreSource> = serde_json::from_str(&raw).map_err(|source| {
            SourceError::Malformed {
                what: "stores",
                source,
            }
        })?;
        tracing::debug!(count = stores.len(), path = %self.stores_path.display(), "loaded store snapshot");
        Ok(stores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("shelfsearch-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn reads_items_from_json_array_file() {
        let path = temp_path("items.json");
        std::fs::write(
            &path,
            r#"[{"id": "i1", "name": "Red Hammer", "storeId": "A"}]"#,
        )
        .unwrap();
        let source = JsonFileSource::new(path.clone(), temp_path("unused.json"));
        let items = source.fetch_all_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Red Hammer");
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_error() {
        let source = JsonFileSource::new(temp_path("does-not-exist.json"), temp_path("x.json"));
        let err = source.fetch_all_items().await.unwrap_err();
        assert!(matches!(err, SourceError::Fetch { what: "items", .. }));
    }

    #[tokio::test]
    async fn invalid_json_is_a_malformed_error() {
        let path = temp_path("bad-stores.json");
        std::fs::write(&path, "{ not json").unwrap();
        let source = JsonFileSource::new(temp_path("y.json"), path.clone());
        let err = source.fetch_all_approved_stores().await.unwrap_err();
        assert!(matches!(err, SourceError::Malformed { what: "stores", .. }));
        std::fs::remove_file(path).ok();
    }
}
