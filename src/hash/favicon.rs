//! Favicon digest
//!
//! The icon bytes are base64-encoded first and the encoded text is hashed
//! with MurmurHash3 (seed 0). The digest is reported as a signed integer.

use super::murmur3::murmur3_32;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Line width used by the wrapped (FOFA/Shodan) encoding
const WRAP_COLUMNS: usize = 76;

/// Both digest conventions for one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaviconDigest {
    /// Hash of the unwrapped base64 text
    pub plain: i32,
    /// Hash of the base64 text broken into 76-column lines
    pub wrapped: i32,
}

impl FaviconDigest {
    pub fn of(data: &[u8]) -> Self {
        Self {
            plain: favicon_hash(data),
            wrapped: favicon_hash_wrapped(data),
        }
    }
}

/// Favicon hash over the unwrapped standard base64 encoding
pub fn favicon_hash(data: &[u8]) -> i32 {
    let encoded = STANDARD.encode(data);
    as_signed(murmur3_32(encoded.as_bytes(), 0))
}

/// Favicon hash over base64 wrapped every 76 characters, newline-terminated
pub fn favicon_hash_wrapped(data: &[u8]) -> i32 {
    as_signed(murmur3_32(&wrap_base64(data), 0))
}

fn wrap_base64(data: &[u8]) -> Vec<u8> {
    let encoded = STANDARD.encode(data);
    let mut wrapped = Vec::with_capacity(encoded.len() + encoded.len() / WRAP_COLUMNS + 1);
    for line in encoded.as_bytes().chunks(WRAP_COLUMNS) {
        wrapped.extend_from_slice(line);
        if line.len() == WRAP_COLUMNS {
            wrapped.push(b'\n');
        }
    }
    // Always terminated, even right after a full line
    wrapped.push(b'\n');
    wrapped
}

#[allow(clippy::cast_possible_wrap)]
const fn as_signed(digest: u32) -> i32 {
    digest as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::icon::FAVICON;

    #[test]
    fn test_fixture_icon_digest() {
        assert_eq!(favicon_hash(&FAVICON), -1_040_723_617);
        assert_eq!(favicon_hash_wrapped(&FAVICON), -478_961_459);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let first = FaviconDigest::of(&FAVICON);
        let second = FaviconDigest::of(&FAVICON);
        assert_eq!(first, second);
        assert_eq!(first.plain, favicon_hash(&FAVICON));
    }

    #[test]
    fn test_wrap_layout() {
        let wrapped = wrap_base64(&FAVICON);
        let text = std::str::from_utf8(&wrapped).unwrap();
        assert!(text.lines().all(|line| line.len() <= WRAP_COLUMNS));
        // 854 bytes encode to exactly 15 full lines of 1140 characters
        assert!(text.ends_with("\n\n"));
        assert_eq!(wrapped.len(), 1140 + 15 + 1);
    }

    #[test]
    fn test_short_input_gets_single_newline() {
        let wrapped = wrap_base64(b"hi");
        assert_eq!(wrapped, b"aGk=\n");
    }
}
