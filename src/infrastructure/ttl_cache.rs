use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_valid(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) < ttl
    }
}

/// A key-value cache whose entries expire a fixed duration after they were stored.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// How long an entry stays valid.
    ttl: Duration,

    /// The cached values and the instant they were stored.
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates an empty cache with the given time to live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Retrieves the time to live of the entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Retrieves a clone of the value stored for the key, unless it has expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;

        entries
            .get(key)
            .filter(|entry| entry.is_valid(self.ttl, Instant::now()))
            .map(|entry| entry.value.clone())
    }

    /// Stores the value for the key, replacing any previous entry and dropping expired ones.
    pub async fn insert(&self, key: K, value: V) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.is_valid(self.ttl, now));
        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }

    /// Retrieves the number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
