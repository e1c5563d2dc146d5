//! Base62 encoding of counter values into short codes.

use crate::shortcode::ShortCode;

/// Symbols used for encoding, in digit order.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// Encoded length of `u64::MAX`, the longest possible code.
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes a counter value as a short code.
///
/// The mapping is the positional base62 representation of `counter` over
/// [`ALPHABET`], most significant digit first, without padding. Zero is `"a"`.
pub fn encode(counter: u64) -> ShortCode {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = MAX_ENCODED_LEN;
    let mut n = counter;

    loop {
        pos -= 1;
        buf[pos] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
        if n == 0 {
            break;
        }
    }

    // every byte comes from ALPHABET, so this is always ASCII
    let encoded = std::str::from_utf8(&buf[pos..]).unwrap_or_default();
    ShortCode::new_unchecked(encoded)
}

/// Decodes a short code back to its counter value.
///
/// Returns `None` for symbols outside [`ALPHABET`], for non-canonical input
/// with leading zero digits, or when the value does not fit in a `u64`.
#[cfg(test)]
fn decode(code: &str) -> Option<u64> {
    if code.is_empty() || (code.len() > 1 && code.as_bytes()[0] == ALPHABET[0]) {
        return None;
    }

    code.bytes().try_fold(0u64, |acc, byte| {
        let digit = ALPHABET.iter().position(|&c| c == byte)? as u64;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}
