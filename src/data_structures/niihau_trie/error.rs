//! Error types for the Niihau Trie.
//!
//! Index operations are total and never fail. The only fallible surface is
//! parsing textual record identifiers.

/// Errors that can occur when parsing a [`RecordId`](super::RecordId).
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum RecordIdError {
    /// The input does not have exactly the expected number of hex digits.
    #[error("Record id must be {expected} hex digits, got {actual}")]
    InvalidLength {
        /// The required number of hex digits.
        expected: usize,
        /// The number of characters supplied.
        actual: usize,
    },

    /// The input contains a character that is not a hex digit.
    #[error("Invalid hex digit '{0}' in record id")]
    InvalidDigit(char),
}
