use sha2::{Digest, Sha256};
use std::fmt::Display;

/// SHA-256 digest of a long URL, hex encoded.
///
/// Used only as the dedup index key; never exposed to callers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprints the given URL. The input is hashed byte for byte, with no
    /// normalization.
    pub fn of(url: &str) -> Self {
        let digest = Sha256::digest(url.as_bytes());
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            Fingerprint::of("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn deterministic_and_fixed_length() {
        let a = Fingerprint::of("https://example.com");
        let b = Fingerprint::of("https://example.com");
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn distinct_urls_distinct_fingerprints() {
        assert_ne!(
            Fingerprint::of("https://example.com"),
            Fingerprint::of("https://example.com/")
        );
    }
}
