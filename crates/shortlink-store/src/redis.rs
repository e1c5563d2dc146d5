use async_trait::async_trait;
use redis::{AsyncCommands, RedisResult};
use shortlink_core::store::{KeyValueStore, Result};
use shortlink_core::StoreError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Connection options for [`RedisStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RedisStoreOptions {
    /// Prefix prepended to every key (e.g. "myapp:"), empty by default.
    #[builder(default, setter(into))]
    pub key_prefix: String,

    /// Upper bound for a single Redis command. `None` waits indefinitely.
    #[builder(default = Some(Duration::from_secs(1)))]
    pub command_timeout: Option<Duration>,
}

impl Default for RedisStoreOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A Redis-backed implementation of [`KeyValueStore`].
///
/// Values are plain Redis strings. TTL writes use `SET .. PX` so the value and
/// its expiration land in one command, and the counter uses `INCR`.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    options: RedisStoreOptions,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        StoreError::Timeout(message)
    } else {
        StoreError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a store on top of an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection, options: RedisStoreOptions) -> Self {
        Self { conn, options }
    }

    /// Opens a connection to `url` and verifies it with `PING`.
    pub async fn connect(url: &str, options: RedisStoreOptions) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::Unavailable(format!("invalid redis url '{url}': {e}")))?;

        let conn_future = client.get_multiplexed_async_connection();
        let conn = match options.command_timeout {
            Some(limit) => tokio::time::timeout(limit, conn_future)
                .await
                .map_err(|_| StoreError::Timeout(format!("connecting to {url}")))?,
            None => conn_future.await,
        }
        .map_err(|e| StoreError::Unavailable(format!("failed to connect to {url}: {e}")))?;

        let store = Self::new(conn, options);
        store.ping().await.map_err(|e| match e {
            StoreError::Operation(message) => StoreError::Unavailable(message),
            other => other,
        })?;

        debug!(url, "connected to redis");
        Ok(store)
    }

    /// Round-trips a `PING`.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _pong: String = self
            .run("PING", redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(())
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.options.key_prefix, key)
    }

    async fn run<T, F>(&self, operation: &str, command: F) -> Result<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        let result = match self.options.command_timeout {
            Some(limit) => tokio::time::timeout(limit, command).await.map_err(|_| {
                warn!(operation, ?limit, "redis command timed out");
                StoreError::Timeout(format!("{operation}: no reply within {limit:?}"))
            })?,
            None => command.await,
        };

        result.map_err(|e| {
            warn!(operation, error = %e, "redis command failed");
            map_redis_error(operation, e)
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get_string(&self, key: &str) -> Result<Option<String>> {
        let key = self.key(key);
        trace!(key = %key, "GET");

        let mut conn = self.conn.clone();
        self.run("GET", conn.get::<_, Option<String>>(&key)).await
    }

    async fn set_string(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let key = self.key(key);
        trace!(key = %key, ?ttl, "SET");

        let mut conn = self.conn.clone();
        match ttl {
            Some(ttl) => {
                // PX rejects zero, so sub-millisecond TTLs round up
                let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
                self.run("SET PX", conn.pset_ex::<_, _, ()>(&key, value, millis))
                    .await
            }
            None => self.run("SET", conn.set::<_, _, ()>(&key, value)).await,
        }
    }

    async fn increment_and_get(&self, key: &str) -> Result<i64> {
        let key = self.key(key);
        trace!(key = %key, "INCR");

        let mut conn = self.conn.clone();
        self.run("INCR", conn.incr::<_, _, i64>(&key, 1)).await
    }
}
