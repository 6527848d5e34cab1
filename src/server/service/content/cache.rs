//! Time-based response cache for the content service.
//!
//! Entries are reused until their revalidation window passes, after which the next
//! lookup misses and the caller refetches. Only successful upstream responses are
//! ever inserted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cached value with its expiry timestamp.
#[derive(Clone)]
struct CachedEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T> CachedEntry<T> {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Keyed cache that revalidates entries after a fixed time-to-live.
///
/// Cloning shares the underlying map, so every request handler sees the same entries.
#[derive(Clone)]
pub struct RevalidateCache<T> {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<String, CachedEntry<T>>>>,
}

impl<T: Clone> RevalidateCache<T> {
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns a clone of the fresh value stored under `key`.
    ///
    /// Expired entries are evicted and reported as a miss.
    ///
    /// # Returns
    /// - `Some(T)` - Value cached within the revalidation window
    /// - `None` - No entry, or the entry has expired
    pub async fn get(&self, key: &str) -> Option<T> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Re-check under the write lock, another request may have refreshed it
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired()) {
            entries.remove(key);
        }
        None
    }

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// Every expired entry is dropped first, so keys that are never read again
    /// do not outlive their revalidation window.
    pub async fn insert(&self, key: String, value: T) {
        let entry = CachedEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired());
        entries.insert(key, entry);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
