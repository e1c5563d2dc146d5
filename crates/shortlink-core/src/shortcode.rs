use crate::encoder::MAX_ENCODED_LEN;
use crate::error::ShortlinkError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// The public identifier of a shortened URL.
///
/// Short codes are 1-11 ASCII alphanumeric characters. Codes minted by the
/// engine come from [`encode`][crate::encoder::encode]; codes arriving from
/// callers go through [`ShortCode::parse`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShortCode(SmolStr);

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = MAX_ENCODED_LEN;

impl ShortCode {
    /// Parses and validates an untrusted short code.
    pub fn parse(code: &str) -> Result<Self, ShortlinkError> {
        Self::validate(code)?;
        Ok(Self(SmolStr::new(code)))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by the encoder.
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), ShortlinkError> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(ShortlinkError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ShortlinkError::InvalidShortCode(format!(
                "must contain only alphanumeric characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl FromStr for ShortCode {
    type Err = ShortlinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::parse("b").is_ok());
        assert!(ShortCode::parse("Abc123xyz").is_ok());
        assert!(ShortCode::parse(&"a".repeat(11)).is_ok());
    }

    #[test]
    fn empty_or_too_long() {
        assert!(ShortCode::parse("").is_err());
        assert!(ShortCode::parse(&"a".repeat(12)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::parse("abc def").is_err());
        assert!(ShortCode::parse("abc-def").is_err());
        assert!(ShortCode::parse("abc_def").is_err());
        assert!(ShortCode::parse("ab/c").is_err());
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let code = ShortCode::parse("bL").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"bL\"");
        assert_eq!(serde_json::from_str::<ShortCode>("\"bL\"").unwrap(), code);
        assert!(serde_json::from_str::<ShortCode>("\"b-L\"").is_err());
    }
}
