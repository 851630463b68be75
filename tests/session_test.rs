// tests/session_test.rs — Integration test: session store round-trips

use std::sync::Arc;

use pretty_assertions::assert_eq;

use stockroom::infra::config::SessionConfig;
use stockroom::inventory::{seed_items, InventoryItem};
use stockroom::session::{load_or_seed, MemoryStore, SessionError, SessionStore};

fn store_with(max_sessions: usize) -> MemoryStore {
    MemoryStore::new(&SessionConfig {
        max_sessions,
        ..SessionConfig::default()
    })
}

#[tokio::test]
async fn test_first_access_seeds_and_persists() {
    let store = store_with(0);

    let items = load_or_seed(&store, "visitor-a").await.unwrap();
    assert_eq!(items, seed_items());

    // The seed write is visible to a plain load, not just the next
    // load_or_seed.
    let reloaded = store.load("visitor-a").await.unwrap();
    assert_eq!(reloaded, Some(seed_items()));
    assert_eq!(store.session_count().await, 1);
}

#[tokio::test]
async fn test_round_trip_through_trait_object() {
    let store: Arc<dyn SessionStore> = Arc::new(store_with(0));

    let mut items = load_or_seed(store.as_ref(), "visitor-a").await.unwrap();
    items.push(InventoryItem::new(4, "Cable", 5, 9.99, "Accessories"));
    store.save("visitor-a", items.clone()).await.unwrap();

    let reloaded = load_or_seed(store.as_ref(), "visitor-a").await.unwrap();
    assert_eq!(reloaded, items);
    assert_eq!(reloaded.len(), 4);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = store_with(0);

    let mut a = load_or_seed(&store, "visitor-a").await.unwrap();
    a.clear();
    store.save("visitor-a", a).await.unwrap();

    // Emptying one visitor's list leaves the other's seeds intact.
    let b = load_or_seed(&store, "visitor-b").await.unwrap();
    assert_eq!(b, seed_items());
    let a = store.load("visitor-a").await.unwrap();
    assert_eq!(a, Some(Vec::new()));
}

#[tokio::test]
async fn test_capacity_error_surfaces_through_load_or_seed() {
    let store = store_with(1);

    load_or_seed(&store, "visitor-a").await.unwrap();
    let err = load_or_seed(&store, "visitor-b").await.unwrap_err();

    assert!(matches!(err, SessionError::Capacity { max: 1 }));
    assert!(err.to_string().contains("session limit reached"));
    assert_eq!(store.session_count().await, 1);
}

#[tokio::test]
async fn test_existing_session_still_writable_at_capacity() {
    let store = store_with(1);

    let mut items = load_or_seed(&store, "visitor-a").await.unwrap();
    items.truncate(1);
    // The cap blocks new sessions, not writes to the one occupying the slot.
    store.save("visitor-a", items).await.unwrap();
    let reloaded = store.load("visitor-a").await.unwrap().unwrap();
    assert_eq!(reloaded.len(), 1);
}

#[tokio::test]
async fn test_reap_without_expiry_is_a_noop() {
    let store = store_with(0);
    load_or_seed(&store, "visitor-a").await.unwrap();
    load_or_seed(&store, "visitor-b").await.unwrap();

    assert_eq!(store.reap_expired().await, 0);
    assert_eq!(store.session_count().await, 2);
}
