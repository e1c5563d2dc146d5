//! Store key layout.

use crate::fingerprint::Fingerprint;
use crate::shortcode::ShortCode;

/// Key of the global counter that mints new short codes.
pub const COUNTER_KEY: &str = "next:url:id";

/// `shortlink:<code>:url`, the short code to long URL mapping.
pub fn forward_key(code: &ShortCode) -> String {
    format!("shortlink:{}:url", code.as_str())
}

/// `urlhash:<fingerprint>:url`, the dedup mapping from fingerprint to short code.
pub fn reverse_key(fingerprint: &Fingerprint) -> String {
    format!("urlhash:{}:url", fingerprint.as_str())
}

/// `shortlink:<code>:detail`, the serialized detail record.
pub fn detail_key(code: &ShortCode) -> String {
    format!("shortlink:{}:detail", code.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format() {
        let code = ShortCode::new_unchecked("bL");
        assert_eq!(forward_key(&code), "shortlink:bL:url");
        assert_eq!(detail_key(&code), "shortlink:bL:detail");

        let fp = Fingerprint::of("");
        assert_eq!(
            reverse_key(&fp),
            "urlhash:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855:url"
        );
    }
}
