//! [`KeyValueStore`][shortlink_core::KeyValueStore] backends.
//!
//! [`RedisStore`] is the production backend. [`InMemoryStore`] keeps
//! everything in process and is meant for tests and single-node runs.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use self::redis::{RedisStore, RedisStoreOptions};
