//! Opaque record identifier.
//!
//! `RecordId` is the 12-byte identifier shape used by document stores for
//! their primary keys. The index never looks inside it; the hex form exists
//! only so callers can move ids through text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RecordIdError;

/// Size of a record identifier in bytes.
pub const RECORD_ID_LEN: usize = 12;

/// A fixed-size opaque record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId([u8; RECORD_ID_LEN]);

impl RecordId {
    /// Wraps raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; RECORD_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw identifier bytes.
    pub const fn as_bytes(&self) -> &[u8; RECORD_ID_LEN] {
        &self.0
    }

    /// Parses the 24-digit hex form, accepting either case.
    pub fn parse_hex(s: &str) -> Result<Self, RecordIdError> {
        let expected = RECORD_ID_LEN * 2;
        let digits: Vec<char> = s.chars().collect();
        if digits.len() != expected {
            return Err(RecordIdError::InvalidLength {
                expected,
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; RECORD_ID_LEN];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: char) -> Result<u8, RecordIdError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(RecordIdError::InvalidDigit(c))
}

impl From<[u8; RECORD_ID_LEN]> for RecordId {
    fn from(bytes: [u8; RECORD_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_hex_display_matches_input() {
        let id: RecordId = SAMPLE.parse().unwrap();
        assert_eq!(id.to_string(), SAMPLE);
        assert_eq!(id.as_bytes()[0], 0x50);
        assert_eq!(id.as_bytes()[11], 0x11);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper = RecordId::parse_hex(&SAMPLE.to_uppercase()).unwrap();
        let lower = RecordId::parse_hex(SAMPLE).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            RecordId::parse_hex("abc"),
            Err(RecordIdError::InvalidLength {
                expected: 24,
                actual: 3
            })
        );
        assert_eq!(
            RecordId::parse_hex("zz7f1f77bcf86cd799439011"),
            Err(RecordIdError::InvalidDigit('z'))
        );
    }

    #[test]
    fn test_serde_json_form() {
        let id = RecordId::from_bytes([1; RECORD_ID_LEN]);
        let json = serde_json::to_string(&id).unwrap();
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
