use std::time::Duration;

use redis::AsyncCommands;
use shortlink_core::{KeyValueStore, StoreError};
use shortlink_store::{RedisStore, RedisStoreOptions};
use shortlink_test_infra::redis::RedisMaster;

/// Test fixture that manages a Redis container using test-infra.
struct Fixture {
    redis: RedisMaster,
}

impl Fixture {
    async fn start() -> Self {
        let redis = RedisMaster::start()
            .await
            .expect("Failed to start Redis master");
        Self { redis }
    }

    async fn store(&self, key_prefix: &str) -> RedisStore {
        let options = RedisStoreOptions::builder()
            .key_prefix(key_prefix)
            .command_timeout(Some(Duration::from_secs(5)))
            .build();
        RedisStore::new(
            self.redis.connection().await.expect("redis connection"),
            options,
        )
    }
}

#[tokio::test]
async fn connect_and_ping() {
    let fixture = Fixture::start().await;
    let url = fixture.redis.url().await.unwrap();

    let store = RedisStore::connect(&url, RedisStoreOptions::default())
        .await
        .unwrap();
    store.ping().await.unwrap();
}

#[tokio::test]
async fn get_set_roundtrip() {
    let fixture = Fixture::start().await;
    let store = fixture.store("").await;

    assert!(store.get_string("missing").await.unwrap().is_none());

    store.set_string("k", "v", None).await.unwrap();
    assert_eq!(store.get_string("k").await.unwrap().as_deref(), Some("v"));

    store.set_string("k", "v2", None).await.unwrap();
    assert_eq!(store.get_string("k").await.unwrap().as_deref(), Some("v2"));
}

#[tokio::test]
async fn set_with_ttl_expires() {
    let fixture = Fixture::start().await;
    let store = fixture.store("").await;

    store
        .set_string("short-lived", "v", Some(Duration::from_millis(500)))
        .await
        .unwrap();
    assert!(store.get_string("short-lived").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(store.get_string("short-lived").await.unwrap().is_none());
}

#[tokio::test]
async fn ttl_is_set_with_the_value() {
    let fixture = Fixture::start().await;
    let store = fixture.store("").await;
    let mut conn = fixture.redis.connection().await.unwrap();

    store
        .set_string("with-ttl", "v", Some(Duration::from_secs(3600)))
        .await
        .unwrap();
    store.set_string("no-ttl", "v", None).await.unwrap();

    let ttl: i64 = conn.ttl("with-ttl").await.unwrap();
    assert!(ttl > 3500 && ttl <= 3600, "unexpected ttl {ttl}");

    // -1: key exists without expiry
    let ttl: i64 = conn.ttl("no-ttl").await.unwrap();
    assert_eq!(ttl, -1);
}

#[tokio::test]
async fn increment_is_atomic_across_connections() {
    let fixture = Fixture::start().await;
    let mut handles = vec![];

    for _ in 0..8 {
        let store = fixture.store("").await;
        handles.push(tokio::spawn(async move {
            let mut seen = Vec::with_capacity(50);
            for _ in 0..50 {
                seen.push(store.increment_and_get("next:url:id").await.unwrap());
            }
            seen
        }));
    }

    let mut all = vec![];
    for handle in handles {
        all.extend(handle.await.unwrap());
    }
    all.sort_unstable();

    assert_eq!(all, (1..=400).collect::<Vec<i64>>());
}

#[tokio::test]
async fn increment_non_integer_fails() {
    let fixture = Fixture::start().await;
    let store = fixture.store("").await;

    store.set_string("ctr", "abc", None).await.unwrap();
    let err = store.increment_and_get("ctr").await.unwrap_err();
    assert!(matches!(err, StoreError::Operation(_)));
}

#[tokio::test]
async fn key_prefix_isolates_namespaces() {
    let fixture = Fixture::start().await;
    let first = fixture.store("one:").await;
    let second = fixture.store("two:").await;
    let mut conn = fixture.redis.connection().await.unwrap();

    first.set_string("k", "v", None).await.unwrap();

    assert!(second.get_string("k").await.unwrap().is_none());
    let raw: Option<String> = conn.get("one:k").await.unwrap();
    assert_eq!(raw.as_deref(), Some("v"));
}
