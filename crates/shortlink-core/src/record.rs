use crate::error::ShortlinkError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on a requested expiration: one hundred years.
pub const MAX_EXPIRATION_MINUTES: u64 = 100 * 365 * 24 * 60;

/// Lifetime shared by the records of one short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// The records never expire.
    Never,
    /// The records expire after the given number of minutes.
    AfterMinutes(u64),
}

impl Expiration {
    /// Converts a caller-supplied minute count. Zero means [`Expiration::Never`].
    pub fn from_minutes(minutes: u64) -> Result<Self, ShortlinkError> {
        match minutes {
            0 => Ok(Expiration::Never),
            m if m > MAX_EXPIRATION_MINUTES => Err(ShortlinkError::InvalidExpiration(format!(
                "expiration must be at most {MAX_EXPIRATION_MINUTES} minutes, got {m}"
            ))),
            m => Ok(Expiration::AfterMinutes(m)),
        }
    }

    /// The store TTL for this expiration, `None` for no expiry.
    pub fn ttl(&self) -> Option<Duration> {
        match self {
            Expiration::Never => None,
            Expiration::AfterMinutes(m) => Some(Duration::from_secs(m * 60)),
        }
    }

    /// Minute count as reported in a [`DetailRecord`]; zero for `Never`.
    pub fn minutes(&self) -> u64 {
        match self {
            Expiration::Never => 0,
            Expiration::AfterMinutes(m) => *m,
        }
    }
}

/// Metadata kept alongside a short code, returned by `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// The original long URL.
    pub url: String,
    /// When the short code was minted.
    pub created_at: Timestamp,
    /// Configured lifetime in minutes; zero means the record never expires.
    pub expiration_in_minutes: u64,
}
