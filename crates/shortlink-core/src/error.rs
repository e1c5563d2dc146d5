use thiserror::Error;

/// Result type for shortening and resolution operations.
pub type Result<T> = std::result::Result<T, ShortlinkError>;

/// Errors raised by a [`KeyValueStore`][crate::store::KeyValueStore] backend.
///
/// Every variant is transient from the engine's point of view: the engine
/// never retries, the caller may retry the whole request.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store operation failed: {0}")]
    Operation(String),
    #[error("stored value is invalid: {0}")]
    InvalidData(String),
}

#[derive(Debug, Clone, Error)]
pub enum ShortlinkError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("invalid expiration: {0}")]
    InvalidExpiration(String),
    #[error("unknown short url: {0}")]
    NotFound(String),
    #[error("stored record is invalid: {0}")]
    InvalidData(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ShortlinkError {
    /// HTTP-equivalent status code carried by this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ShortlinkError::InvalidUrl(_)
            | ShortlinkError::InvalidShortCode(_)
            | ShortlinkError::InvalidExpiration(_) => 400,
            ShortlinkError::NotFound(_) => 404,
            ShortlinkError::InvalidData(_) | ShortlinkError::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ShortlinkError::InvalidUrl("x".into()).status_code(), 400);
        assert_eq!(ShortlinkError::InvalidShortCode("x".into()).status_code(), 400);
        assert_eq!(ShortlinkError::InvalidExpiration("x".into()).status_code(), 400);
        assert_eq!(ShortlinkError::NotFound("b".into()).status_code(), 404);
        assert_eq!(ShortlinkError::InvalidData("x".into()).status_code(), 500);

        let store: ShortlinkError = StoreError::Timeout("GET".into()).into();
        assert_eq!(store.status_code(), 500);
    }
}
