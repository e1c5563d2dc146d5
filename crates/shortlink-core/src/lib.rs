//! Core types and traits for the Shortlink URL shortener.
//!
//! This crate provides the identifier encoder, the URL fingerprinter, the
//! record types and the [`KeyValueStore`] interface shared by the engine,
//! the store backends and the HTTP gateway.

pub mod clock;
pub mod encoder;
pub mod error;
pub mod fingerprint;
pub mod keys;
pub mod record;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, ShortlinkError, StoreError};
pub use fingerprint::Fingerprint;
pub use record::{DetailRecord, Expiration};
pub use shortcode::ShortCode;
pub use shortener::{Resolver, Shortener};
pub use store::KeyValueStore;
