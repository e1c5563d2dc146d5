use async_trait::async_trait;
use shortlink_core::keys::{detail_key, forward_key};
use shortlink_core::{DetailRecord, KeyValueStore, Resolver, Result, ShortCode, ShortlinkError};
use std::sync::Arc;
use tracing::{debug, trace};

/// The resolution engine.
///
/// Reads are side-effect free: nothing is written and no TTL is extended.
/// Expiry is left to the store, so a code whose records have expired reads
/// exactly like one that never existed.
#[derive(Debug, Clone)]
pub struct ResolverService<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> ResolverService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> Resolver for ResolverService<S> {
    async fn unshorten(&self, code: &ShortCode) -> Result<String> {
        trace!(code = %code, "resolving short code");

        match self.store.get_string(&forward_key(code)).await? {
            Some(url) => {
                debug!(code = %code, url = %url, "resolved short code");
                Ok(url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ShortlinkError::NotFound(code.to_string()))
            }
        }
    }

    async fn info(&self, code: &ShortCode) -> Result<DetailRecord> {
        trace!(code = %code, "fetching detail record");

        let Some(raw) = self.store.get_string(&detail_key(code)).await? else {
            trace!(code = %code, "detail record not found");
            return Err(ShortlinkError::NotFound(code.to_string()));
        };

        serde_json::from_str(&raw).map_err(|e| {
            ShortlinkError::InvalidData(format!("detail record for '{code}' is corrupt: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FailingStore;
    use jiff::Timestamp;
    use shortlink_core::StoreError;
    use shortlink_store::InMemoryStore;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    async fn setup_with_url(code: &ShortCode, url: &str) -> ResolverService<InMemoryStore> {
        let store = InMemoryStore::new();
        store
            .set_string(&forward_key(code), url, None)
            .await
            .unwrap();
        ResolverService::new(store)
    }

    #[tokio::test]
    async fn unshorten_existing_code() {
        let c = code("b");
        let service = setup_with_url(&c, "https://example.com").await;

        assert_eq!(service.unshorten(&c).await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn unshorten_nonexistent_code() {
        let service = ResolverService::new(InMemoryStore::new());

        let err = service.unshorten(&code("doesNotExist")).await.unwrap_err();
        assert!(matches!(err, ShortlinkError::NotFound(ref c) if c == "doesNotExist"));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn info_nonexistent_code() {
        let service = ResolverService::new(InMemoryStore::new());

        let err = service.info(&code("nope")).await.unwrap_err();
        assert!(matches!(err, ShortlinkError::NotFound(_)));
    }

    #[tokio::test]
    async fn info_is_idempotent() {
        let store = InMemoryStore::new();
        let c = code("b");
        let detail = DetailRecord {
            url: "https://example.com".to_string(),
            created_at: Timestamp::from_second(1_700_000_000).unwrap(),
            expiration_in_minutes: 60,
        };
        store
            .set_string(&detail_key(&c), &serde_json::to_string(&detail).unwrap(), None)
            .await
            .unwrap();
        let service = ResolverService::new(store);

        let first = service.info(&c).await.unwrap();
        let second = service.info(&c).await.unwrap();
        assert_eq!(first, detail);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn corrupt_detail_record_is_invalid_data() {
        let store = InMemoryStore::new();
        let c = code("b");
        store
            .set_string(&detail_key(&c), "{not json", None)
            .await
            .unwrap();
        let service = ResolverService::new(store);

        let err = service.info(&c).await.unwrap_err();
        assert!(matches!(err, ShortlinkError::InvalidData(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let service = ResolverService::new(FailingStore);

        let err = service.unshorten(&code("b")).await.unwrap_err();
        assert!(matches!(err, ShortlinkError::Store(StoreError::Unavailable(_))));
    }
}
