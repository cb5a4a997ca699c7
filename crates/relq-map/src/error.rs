//! Error types for entity marshaling.

use relq_types::{CursorError, FieldType, ValueTypeError};
use thiserror::Error;

/// Errors surfaced while building or applying mappers.
#[derive(Debug, Error)]
pub enum MapError {
    /// A raw column value could not convert to the field's declared type.
    /// Surfaces at the first mapped row, not at mapper build.
    #[error("column value for field '{field}' has the wrong type")]
    MappingType {
        /// The field being assigned.
        field: &'static str,
        /// The underlying conversion failure.
        #[source]
        source: ValueTypeError,
    },
    /// A field type has no parameter representation. Surfaces when the
    /// parameter mapper is first built; the failed build is not cached.
    #[error("field '{field}' of type {ty} has no parameter representation")]
    UnsupportedParameterType {
        /// The offending field.
        field: &'static str,
        /// Its declared type.
        ty: FieldType,
    },
    /// The row cursor failed.
    #[error(transparent)]
    Cursor(#[from] CursorError),
}
