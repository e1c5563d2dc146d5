use async_trait::async_trait;
use shortlink_core::encoder::encode;
use shortlink_core::keys::{detail_key, forward_key, reverse_key, COUNTER_KEY};
use shortlink_core::{
    Clock, DetailRecord, Expiration, Fingerprint, KeyValueStore, Result, ShortCode, Shortener,
    ShortlinkError, SystemClock,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The shortening engine.
///
/// Deduplicates by URL fingerprint, mints new codes from the store's atomic
/// counter and writes the detail, forward and reverse records with one TTL.
///
/// The service keeps no mutable state of its own; concurrent callers only
/// contend on the store's counter.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, C = SystemClock> {
    store: Arc<S>,
    clock: C,
}

impl<S: KeyValueStore> ShortenerService<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ShortenerService<S, C> {
    /// Creates a service that stamps `created_at` from `clock`.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store: Arc::new(store),
            clock,
        }
    }

    /// Looks up a live short code for `fingerprint`.
    ///
    /// A reverse record that does not parse, or whose forward record is
    /// already gone, counts as a miss and is overwritten by the caller.
    async fn find_existing(&self, fingerprint: &Fingerprint) -> Result<Option<ShortCode>> {
        let Some(stored) = self.store.get_string(&reverse_key(fingerprint)).await? else {
            trace!(fingerprint = %fingerprint, "no reverse record");
            return Ok(None);
        };

        let code = match ShortCode::parse(&stored) {
            Ok(code) => code,
            Err(e) => {
                warn!(fingerprint = %fingerprint, error = %e, "ignoring malformed reverse record");
                return Ok(None);
            }
        };

        if self.store.get_string(&forward_key(&code)).await?.is_none() {
            debug!(code = %code, "reverse record outlived its forward record");
            return Ok(None);
        }

        Ok(Some(code))
    }

    async fn allocate(&self) -> Result<ShortCode> {
        let id = self.store.increment_and_get(COUNTER_KEY).await?;
        let id = u64::try_from(id).map_err(|_| {
            ShortlinkError::InvalidData(format!("counter '{COUNTER_KEY}' returned {id}"))
        })?;
        Ok(encode(id))
    }

    /// Writes the three records of a new code.
    ///
    /// Detail goes first so a forward record is never visible without it, and
    /// the reverse record goes last so a dedup hit never points at a code
    /// whose forward record is missing.
    async fn persist(
        &self,
        code: &ShortCode,
        url: &str,
        fingerprint: &Fingerprint,
        expiration: Expiration,
    ) -> Result<()> {
        let ttl = expiration.ttl();
        let detail = DetailRecord {
            url: url.to_owned(),
            created_at: self.clock.now(),
            expiration_in_minutes: expiration.minutes(),
        };
        let detail = serde_json::to_string(&detail).map_err(|e| {
            ShortlinkError::InvalidData(format!("failed to serialize detail record: {e}"))
        })?;

        self.store
            .set_string(&detail_key(code), &detail, ttl)
            .await?;
        self.store.set_string(&forward_key(code), url, ttl).await?;
        self.store
            .set_string(&reverse_key(fingerprint), code.as_str(), ttl)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl<S: KeyValueStore, C: Clock> Shortener for ShortenerService<S, C> {
    async fn shorten(&self, url: &str, expiration_minutes: u64) -> Result<ShortCode> {
        let expiration = Expiration::from_minutes(expiration_minutes)?;
        let fingerprint = Fingerprint::of(url);

        if let Some(code) = self.find_existing(&fingerprint).await? {
            debug!(code = %code, "dedup hit");
            return Ok(code);
        }

        let code = self.allocate().await?;
        self.persist(&code, url, &fingerprint, expiration).await?;

        debug!(code = %code, expiration_minutes, "minted short code");
        Ok(code)
    }
}
