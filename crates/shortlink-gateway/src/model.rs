use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    pub expiration_in_minutes: u64,
}

impl ShortenRequest {
    /// Parses the target URL, accepting only absolute http(s) URLs with a host.
    ///
    /// The parsed form is what gets stored, so characters that are not valid in
    /// a `Location` header come back percent-encoded.
    pub fn parse_url(&self) -> Result<Url> {
        let raw = self.url.trim();
        if raw.is_empty() {
            return Err(AppError::BadRequest("url cannot be empty".to_string()));
        }

        let url =
            Url::parse(raw).map_err(|e| AppError::BadRequest(format!("invalid url: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::BadRequest(format!(
                "url scheme must be http or https: {}",
                url.scheme()
            )));
        }

        if url.host_str().unwrap_or_default().is_empty() {
            return Err(AppError::BadRequest(format!("url must have a host: {raw}")));
        }

        Ok(url)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub shortlink: String,
}

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub shortlink: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const OK: Self = Self { status: "ok" };
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
