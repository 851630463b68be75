// src/session/memory.rs — In-memory session backend

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::infra::config::SessionConfig;
use crate::inventory::InventoryItem;
use crate::session::{SessionError, SessionStore};

/// One session's stored state plus the bookkeeping the expiry policy needs.
#[derive(Debug, Clone)]
struct SessionEntry {
    items: Vec<InventoryItem>,
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

impl SessionEntry {
    fn new(items: Vec<InventoryItem>) -> Self {
        let now = Utc::now();
        Self {
            items,
            created_at: now,
            last_seen: now,
        }
    }
}

/// Session store backed by a process-local map. State lives exactly as long
/// as the process; both production and tests use this backend.
///
/// Expiry is enforced lazily on access and eagerly by [`reap_expired`],
/// which the server runs on an interval.
///
/// [`reap_expired`]: SessionStore::reap_expired
pub struct MemoryStore {
    entries: RwLock<HashMap<String, SessionEntry>>,
    /// 0 = sessions never expire.
    idle_timeout_secs: u64,
    /// 0 = no cap on concurrent sessions.
    max_sessions: usize,
}

impl MemoryStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            idle_timeout_secs: config.idle_timeout_secs,
            max_sessions: config.max_sessions,
        }
    }

    /// Number of live (not yet reaped) sessions.
    pub async fn session_count(&self) -> usize {
        self.entries.read().await.len()
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        if self.idle_timeout_secs == 0 {
            return false;
        }
        now - entry.last_seen >= Duration::seconds(self.idle_timeout_secs as i64)
    }

    /// Shift a session's timestamps into the past, as if it had been idle.
    #[cfg(test)]
    async fn backdate(&self, key: &str, secs: i64) {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(key) {
            entry.created_at -= Duration::seconds(secs);
            entry.last_seen -= Duration::seconds(secs);
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<InventoryItem>>, SessionError> {
        let now = Utc::now();
        // Write lock: a hit refreshes last_seen, an expired entry is dropped.
        let mut entries = self.entries.write().await;
        match entries.get_mut(key) {
            Some(entry) if self.is_expired(entry, now) => {
                tracing::debug!(
                    "session expired after {}s idle (created {})",
                    self.idle_timeout_secs,
                    entry.created_at
                );
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => {
                entry.last_seen = now;
                Ok(Some(entry.items.clone()))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, key: &str, items: Vec<InventoryItem>) -> Result<(), SessionError> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(key) {
            Some(entry) => {
                entry.items = items;
                entry.last_seen = Utc::now();
                Ok(())
            }
            None => {
                if self.max_sessions > 0 && entries.len() >= self.max_sessions {
                    return Err(SessionError::Capacity {
                        max: self.max_sessions,
                    });
                }
                entries.insert(key.to_string(), SessionEntry::new(items));
                Ok(())
            }
        }
    }

    async fn reap_expired(&self) -> usize {
        if self.idle_timeout_secs == 0 {
            return 0;
        }
        let now = Utc::now();
        let timeout = Duration::seconds(self.idle_timeout_secs as i64);
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| now - entry.last_seen < timeout);
        before - entries.len()
    }
}
