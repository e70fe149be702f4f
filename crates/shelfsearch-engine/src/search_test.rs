use chrono::{TimeZone, Utc};
use shelfsearch_core::{Coordinates, Item, StoreSource};

use super::*;
use crate::error::SourceError;
use crate::source::InMemorySource;

fn make_item(id: &str, name: &str, store_id: &str) -> Item {
    Item {
        id: id.to_owned(),
        name: name.to_owned(),
        category: None,
        description: None,
        store_id: store_id.to_owned(),
        price: None,
        in_stock: None,
        verified: false,
        verified_at: None,
        report_count: 0,
        deleted: false,
    }
}

fn make_store(id: &str, name: &str, location: Option<Coordinates>) -> StoreSource {
    StoreSource {
        id: id.to_owned(),
        name: Some(name.to_owned()),
        store_name: None,
        address: Some("1 Main St".to_owned()),
        store_address: None,
        location,
        latitude: None,
        longitude: None,
        owner_id: None,
    }
}

/// A collaborator whose fetches always fail.
struct FailingSource;

impl CatalogSource for FailingSource {
    async fn fetch_all_items(&self) -> Result<Vec<Item>, SourceError> {
        Err(SourceError::Fetch {
            what: "items",
            reason: "backend unreachable".to_string(),
        })
    }

    async fn fetch_all_approved_stores(&self) -> Result<Vec<StoreSource>, SourceError> {
        Err(SourceError::Fetch {
            what: "stores",
            reason: "backend unreachable".to_string(),
        })
    }
}

#[tokio::test]
async fn empty_query_returns_empty_list() {
    let source = InMemorySource::new(
        vec![make_item("i1", "Red Hammer", "A")],
        vec![make_store("A", "Hardware Corner", None)],
    );
    let engine = SearchEngine::new(source);
    assert!(engine.search("", None).await.unwrap().is_empty());
    assert!(engine.search("   \t ", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn prefixed_store_id_resolves_and_orphan_is_dropped() {
    let source = InMemorySource::new(
        vec![
            make_item("i1", "Red Hammer", "virtual_ABC123"),
            make_item("i2", "Red Hammer Deluxe", "XYZ999"),
        ],
        vec![make_store("ABC123", "Hardware Corner", None)],
    );
    let engine = SearchEngine::new(source);
    let results = engine.search("red hammer", None).await.unwrap();
    assert_eq!(results.len(), 1, "orphaned item must not leak through");
    assert_eq!(results[0].item.id, "i1");
    assert_eq!(results[0].store.id, "ABC123");
}

#[tokio::test]
async fn deleted_items_are_excluded() {
    let mut deleted = make_item("i1", "Red Hammer", "A");
    deleted.deleted = true;
    let source = InMemorySource::new(
        vec![deleted, make_item("i2", "Red Hammer", "A")],
        vec![make_store("A", "Hardware Corner", None)],
    );
    let engine = SearchEngine::new(source);
    let results = engine.search("red hammer", None).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "i2");
}

#[tokio::test]
async fn verification_breaks_tie_for_red_hammer_scenario() {
    let mut named_match = make_item("i1", "Red Hammer", "A");
    named_match.verified = true;
    named_match.verified_at = Some(Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap());
    let mut description_match = make_item("i2", "Camping Supplies", "A");
    description_match.description = Some("tent pegs and a red hammer clip".to_owned());

    let source = InMemorySource::new(
        vec![description_match, named_match],
        vec![make_store("A", "Hardware Corner", None)],
    );
    let engine = SearchEngine::new(source);
    let results = engine.search("red hammer", None).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].item.name, "Red Hammer",
        "verified item ranks first when distance is absent for both"
    );
}

#[tokio::test]
async fn results_are_capped_at_twenty() {
    let items: Vec<_> = (0..35)
        .map(|i| make_item(&format!("i{i:02}"), &format!("Hammer {i:02}"), "A"))
        .collect();
    let source = InMemorySource::new(items, vec![make_store("A", "Hardware Corner", None)]);
    let engine = SearchEngine::new(source);
    let results = engine.search("hammer", None).await.unwrap();
    assert_eq!(results.len(), 20);
}

#[tokio::test]
async fn distance_orders_stores_and_sentinel_sorts_last() {
    let sydney = Coordinates::new(-33.8688, 151.2093);
    let melbourne = Coordinates::new(-37.8136, 144.9631);
    let parramatta = Coordinates::new(-33.8151, 151.0011);

    let source = InMemorySource::new(
        vec![
            make_item("far", "Hammer", "MEL"),
            make_item("unlocated", "Hammer", "NOWHERE"),
            make_item("near", "Hammer", "PAR"),
        ],
        vec![
            make_store("MEL", "Melbourne Tools", Some(melbourne)),
            make_store("PAR", "Parramatta Tools", Some(parramatta)),
            make_store("NOWHERE", "Ghost Tools", Some(Coordinates::new(0.0, 0.0))),
        ],
    );
    let engine = SearchEngine::new(source);
    let results = engine.search("hammer", Some(sydney)).await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].item.id, "near");
    assert_eq!(results[1].item.id, "far");
    assert_eq!(
        results[2].item.id, "unlocated",
        "sentinel-location store belongs in the distance-less bucket"
    );
    assert!(results[2].distance_km.is_none());
}

#[tokio::test]
async fn no_requester_location_omits_distance_everywhere() {
    let melbourne = Coordinates::new(-37.8136, 144.9631);
    let source = InMemorySource::new(
        vec![make_item("i1", "Hammer", "MEL")],
        vec![make_store("MEL", "Melbourne Tools", Some(melbourne))],
    );
    let engine = SearchEngine::new(source);
    let results = engine.search("hammer", None).await.unwrap();
    assert!(results[0].distance_km.is_none());
}

#[tokio::test]
async fn identical_inputs_yield_identical_output() {
    let sydney = Coordinates::new(-33.8688, 151.2093);
    let mut items = Vec::new();
    for i in 0u32..30 {
        let mut item = make_item(&format!("i{i:02}"), &format!("Hammer {}", i % 7), "A");
        item.verified = i % 3 == 0;
        item.report_count = i % 5;
        items.push(item);
    }
    let stores = vec![make_store(
        "A",
        "Hardware Corner",
        Some(Coordinates::new(-33.9, 151.1)),
    )];
    let engine = SearchEngine::new(InMemorySource::new(items, stores));

    let first = engine.search("hammer", Some(sydney)).await.unwrap();
    let second = engine.search("hammer", Some(sydney)).await.unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "repeated invocations must be byte-identical"
    );
}

#[tokio::test]
async fn fetch_failure_is_terminal_data_access_error() {
    let engine = SearchEngine::new(FailingSource);
    let err = engine.search("hammer", None).await.unwrap_err();
    assert!(matches!(err, EngineError::DataAccess(_)));
    assert_eq!(err.to_string(), "search failed, please try again");
}

#[tokio::test]
async fn fetch_failure_beats_empty_query_only_when_query_present() {
    // The empty-query short-circuit happens before any fetch, so even a
    // failing source yields an empty list for a blank query.
    let engine = SearchEngine::new(FailingSource);
    assert!(engine.search("  ", None).await.unwrap().is_empty());
}
