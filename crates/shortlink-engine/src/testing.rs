//! Store doubles shared by the engine tests.

use async_trait::async_trait;
use shortlink_core::store::Result;
use shortlink_core::{KeyValueStore, StoreError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Delegates to an inner store and records every write in order.
#[derive(Clone)]
pub(crate) struct RecordingStore<S> {
    inner: Arc<S>,
    writes: Arc<Mutex<Vec<(String, Option<Duration>)>>>,
}

impl<S> RecordingStore<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self {
            inner: Arc::new(inner),
            writes: Arc::default(),
        }
    }

    pub(crate) fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub(crate) fn ttls(&self) -> Vec<Option<Duration>> {
        self.writes.lock().unwrap().iter().map(|(_, ttl)| *ttl).collect()
    }
}

#[async_trait]
impl<S: KeyValueStore> KeyValueStore for RecordingStore<S> {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_string(key).await
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        self.writes.lock().unwrap().push((key.to_owned(), ttl));
        self.inner.set_string(key, value, ttl).await
    }

    async fn increment_and_get(&self, key: &str) -> Result<i64> {
        self.inner.increment_and_get(key).await
    }
}

/// A store whose backend is always down.
pub(crate) struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get_string(&self, _key: &str) -> Result<Option<String>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn set_string(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> Result<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn increment_and_get(&self, _key: &str) -> Result<i64> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
