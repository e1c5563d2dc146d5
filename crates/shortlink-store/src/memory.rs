use async_trait::async_trait;
use dashmap::DashMap;
use jiff::{SignedDuration, Timestamp};
use shortlink_core::store::{KeyValueStore, Result};
use shortlink_core::{Clock, StoreError, SystemClock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Every this many writes, expired entries are swept from the whole map.
const SWEEP_INTERVAL: u64 = 256;

/// In-memory storage entry.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expire_at: Option<Timestamp>,
}

impl Entry {
    fn is_expired(&self, now: Timestamp) -> bool {
        self.expire_at.is_some_and(|expire_at| now >= expire_at)
    }
}

/// In-memory implementation of [`KeyValueStore`] using DashMap.
///
/// Expiration is evaluated against the configured [`Clock`]: expired keys
/// read as absent and are evicted on access, and a periodic sweep on the
/// write path drops keys nobody reads again. Clones share the same map.
#[derive(Debug, Clone)]
pub struct InMemoryStore<C = SystemClock> {
    entries: Arc<DashMap<String, Entry>>,
    writes: Arc<AtomicU64>,
    clock: C,
}

impl InMemoryStore<SystemClock> {
    /// Creates a new in-memory store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryStore<C> {
    /// Creates a new in-memory store that reads time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            writes: Arc::new(AtomicU64::new(0)),
            clock,
        }
    }

    fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    fn expire_at(&self, ttl: Option<Duration>) -> Result<Option<Timestamp>> {
        let Some(ttl) = ttl else {
            return Ok(None);
        };
        let ttl = SignedDuration::try_from(ttl)
            .map_err(|e| StoreError::Operation(format!("ttl out of range: {e}")))?;
        self.clock
            .now()
            .checked_add(ttl)
            .map(Some)
            .map_err(|e| StoreError::Operation(format!("ttl out of range: {e}")))
    }
}

#[async_trait]
impl<C: Clock> KeyValueStore for InMemoryStore<C> {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let now = self.clock.now();

        let Some(entry) = self.entries.get(key) else {
            trace!(key, "key not found");
            return Ok(None);
        };

        if entry.is_expired(now) {
            drop(entry);
            self.entries.remove_if(key, |_, e| e.is_expired(now));
            trace!(key, "key expired");
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let expire_at = self.expire_at(ttl)?;
        self.entries.insert(
            key.to_owned(),
            Entry {
                value: value.to_owned(),
                expire_at,
            },
        );
        trace!(key, ?ttl, "stored value");

        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        if writes % SWEEP_INTERVAL == 0 {
            let purged = self.purge_expired();
            if purged > 0 {
                debug!(purged, "swept expired keys");
            }
        }
        Ok(())
    }

    async fn increment_and_get(&self, key: &str) -> Result<i64> {
        let now = self.clock.now();

        // the entry guard holds the shard lock for the whole read-modify-write
        let mut entry = self.entries.entry(key.to_owned()).or_insert_with(|| Entry {
            value: "0".to_string(),
            expire_at: None,
        });

        if entry.is_expired(now) {
            entry.value = "0".to_string();
            entry.expire_at = None;
        }

        let current: i64 = entry.value.parse().map_err(|_| {
            StoreError::InvalidData(format!("value at '{key}' is not an integer"))
        })?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| StoreError::InvalidData(format!("increment of '{key}' overflows")))?;
        entry.value = next.to_string();

        Ok(next)
    }
}
