use crate::error::Result;
use crate::record::DetailRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens `url`, returning the existing code if the URL was already
    /// shortened and its records are still live.
    ///
    /// `expiration_minutes == 0` means the short code never expires.
    async fn shorten(&self, url: &str, expiration_minutes: u64) -> Result<ShortCode>;
}

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Resolves a short code to its original URL.
    /// Fails with `NotFound` if the code does not exist or has expired.
    async fn unshorten(&self, code: &ShortCode) -> Result<String>;

    /// Returns the detail record of a short code.
    /// Fails with `NotFound` if the code does not exist or has expired.
    async fn info(&self, code: &ShortCode) -> Result<DetailRecord>;
}
