// src/session/mod.rs — Keyed session storage for per-visitor inventory lists

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::inventory::{seed_items, InventoryItem};
use crate::util::truncate_str;

/// Why the session backend could not serve a request. Handlers degrade to
/// seeded defaults on any of these; nothing here aborts a request.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session backend unavailable: {0}")]
    Unavailable(String),

    #[error("session limit reached ({max} active)")]
    Capacity { max: usize },
}

/// Storage for one inventory list per session key.
///
/// The list is read and replaced wholesale; there is no partial-update API.
/// Implementations decide their own expiry and capacity policy.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the list stored under `key`, or `None` for an unknown (or
    /// expired) session.
    async fn load(&self, key: &str) -> Result<Option<Vec<InventoryItem>>, SessionError>;

    /// Replace the list stored under `key`, creating the session if needed.
    async fn save(&self, key: &str, items: Vec<InventoryItem>) -> Result<(), SessionError>;

    /// Drop sessions idle past the backend's timeout. Returns how many were
    /// removed. Backends without an expiry policy keep the default no-op.
    async fn reap_expired(&self) -> usize {
        0
    }
}

/// Fetch the session's list, seeding a fresh session with the three fixed
/// records. Seeds are persisted immediately so the next request finds them.
pub async fn load_or_seed(
    store: &dyn SessionStore,
    key: &str,
) -> Result<Vec<InventoryItem>, SessionError> {
    if let Some(items) = store.load(key).await? {
        return Ok(items);
    }
    let items = seed_items();
    store.save(key, items.clone()).await?;
    tracing::debug!("seeded session {} with {} items", truncate_str(key, 8), items.len());
    Ok(items)
}
