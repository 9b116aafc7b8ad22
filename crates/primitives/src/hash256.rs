//! Implementation of `Hash256`, the 32-byte digest identifying blocks and transactions.

use crate::constants::HASH_SIZE;
use crate::error::{PrimitiveError, PrimitiveResult};
use std::fmt;
use std::str::FromStr;

/// A 256-bit block or transaction digest.
///
/// The textual form is exactly 64 hexadecimal characters in byte order, with
/// no `0x` prefix.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Hash256([u8; HASH_SIZE]);

impl Hash256 {
    /// Parses a digest from its 64-character hexadecimal form.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` when the string is not 64 characters
    /// long and `PrimitiveError::InvalidHex` when it contains non-hex characters.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        if s.len() != HASH_SIZE * 2 {
            return Err(PrimitiveError::InvalidLength {
                expected: HASH_SIZE * 2,
                actual: s.len(),
            });
        }

        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| PrimitiveError::InvalidHex)?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Hash256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20";

    #[test]
    fn test_hash256_parse_keeps_byte_order() {
        let hash = Hash256::parse(SAMPLE).unwrap();
        assert_eq!(hash.as_bytes()[0], 0x01);
        assert_eq!(hash.as_bytes()[31], 0x20);
        assert_eq!(hash.to_string(), SAMPLE);
    }

    #[test]
    fn test_hash256_parse_accepts_uppercase() {
        let hash = Hash256::parse(&SAMPLE.to_uppercase()).unwrap();
        assert_eq!(hash.to_string(), SAMPLE);
    }

    #[test]
    fn test_hash256_rejects_prefix_and_bad_length() {
        let prefixed = format!("0x{SAMPLE}");
        assert_eq!(
            Hash256::parse(&prefixed),
            Err(PrimitiveError::InvalidLength {
                expected: 64,
                actual: 66
            })
        );
        assert!(Hash256::parse("abcd").is_err());
        assert!(Hash256::parse("").is_err());
    }

    #[test]
    fn test_hash256_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert_eq!(Hash256::parse(&bad), Err(PrimitiveError::InvalidHex));
    }

    #[test]
    fn test_hash256_debug_format() {
        let hash = Hash256::parse(&"FF".repeat(32)).unwrap();
        assert_eq!(format!("{hash:?}"), format!("Hash256({})", "ff".repeat(32)));
    }
}
