//! Shared error types.

use thiserror::Error;

/// A runtime value did not have the type a conversion expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, got {got}")]
pub struct ValueTypeError {
    /// The type the conversion expected.
    pub expected: &'static str,
    /// The type actually found.
    pub got: &'static str,
}

/// Failure reading from a row cursor.
#[derive(Debug, Error)]
pub enum CursorError {
    /// Requested column ordinal does not exist in the result set.
    #[error("column ordinal {0} out of range")]
    OrdinalOutOfRange(usize),
    /// The cursor has no current row (before first advance or after end).
    #[error("cursor has no current row")]
    NoRow,
    /// The underlying reader failed.
    #[error("cursor read failed: {0}")]
    Read(String),
}
