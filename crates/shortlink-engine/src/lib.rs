//! Shortening and resolution engines.
//!
//! Both services are generic over a [`KeyValueStore`][shortlink_core::KeyValueStore]
//! and hold no in-process state besides a handle to it, so they can be
//! cloned freely and shared across tasks.
//!
//! # Example
//!
//! ```rust
//! use shortlink_core::{Resolver, Shortener};
//! use shortlink_engine::{ResolverService, ShortenerService};
//! use shortlink_store::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! let shortener = ShortenerService::new(store.clone());
//! let resolver = ResolverService::new(store);
//!
//! let code = shortener.shorten("https://example.com", 60).await?;
//! assert_eq!(resolver.unshorten(&code).await?, "https://example.com");
//! # Ok(())
//! # }
//! ```

pub mod resolver;
pub mod shortener;

#[cfg(test)]
mod testing;

pub use resolver::ResolverService;
pub use shortener::ShortenerService;
