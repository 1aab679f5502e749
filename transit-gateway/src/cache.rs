//! In-memory cache for station search results.
//!
//! Keys are raw query strings, case-sensitive and unnormalized. Entries are
//! never evicted or refreshed; the cache lives exactly as long as the
//! process. Concurrent misses for the same key may each call upstream and
//! overwrite each other's entry (last write wins) — in-flight lookups are
//! deliberately not coalesced.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Thread-safe query → search-results cache.
#[derive(Clone, Default)]
pub struct SearchCache {
    inner: Arc<RwLock<HashMap<String, Value>>>,
}

impl SearchCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached results for a query.
    pub async fn get(&self, query: &str) -> Option<Value> {
        let guard = self.inner.read().await;
        guard.get(query).cloned()
    }

    /// Store the results for a query, replacing any existing entry.
    pub async fn insert(&self, query: String, results: Value) {
        let mut guard = self.inner.write().await;
        guard.insert(query, results);
    }

    /// Number of cached queries.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check whether the cache is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }
}
