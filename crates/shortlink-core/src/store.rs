use crate::error::StoreError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, StoreError>;

/// The key-value store the engine is built on.
///
/// Three primitives are enough: plain string reads, string writes that set
/// their expiration atomically with the value, and an atomic counter.
/// Everything else (dedup, record consistency) is layered on top by the engine.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Reads a string value.
    ///
    /// Returns `Ok(None)` if the key is absent or has expired.
    async fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Writes a string value, replacing any previous value and expiration.
    ///
    /// With `ttl = None` the key never expires.
    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// Atomically increments the integer at `key` and returns the new value.
    ///
    /// A missing key counts as zero, so the first call returns 1.
    /// Must be linearizable across every caller sharing the store.
    async fn increment_and_get(&self, key: &str) -> Result<i64>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        (**self).get_string(key).await
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        (**self).set_string(key, value, ttl).await
    }

    async fn increment_and_get(&self, key: &str) -> Result<i64> {
        (**self).increment_and_get(key).await
    }
}
