//! The forward-only row cursor consumed by the marshaling layer.

use crate::error::CursorError;
use crate::value::SqlValue;

/// A forward-only reader over tabular result rows.
///
/// The execution layer owns the cursor's lifecycle and any blocking I/O
/// behind `advance`; the mapping layer only drives it in a single linear
/// pass. SQL NULL is reported as [`SqlValue::Null`].
pub trait RowCursor {
    /// Ordered column names of the current result set.
    fn columns(&self) -> &[String];

    /// Advance to the next row. Returns `false` once the result set is
    /// exhausted.
    fn advance(&mut self) -> Result<bool, CursorError>;

    /// Raw value at the given column position of the current row.
    fn value_at(&self, ordinal: usize) -> Result<SqlValue, CursorError>;

    /// Position of a column by name, if present.
    fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.columns().iter().position(|c| c == name)
    }

    /// Raw value of a named column of the current row.
    fn value_of(&self, name: &str) -> Result<SqlValue, CursorError> {
        match self.ordinal_of(name) {
            Some(ordinal) => self.value_at(ordinal),
            None => Err(CursorError::Read(format!("unknown column '{}'", name))),
        }
    }
}
