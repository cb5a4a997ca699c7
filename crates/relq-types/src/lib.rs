//! Shared leaf types for relq.
//!
//! This crate defines the runtime value sum type, the semantic type
//! vocabulary for fields and literals, the forward-only row cursor consumed
//! by the marshaling layer, and the bound-parameter type produced by it.

pub mod cursor;
pub mod error;
pub mod param;
pub mod types;
pub mod value;

pub use cursor::RowCursor;
pub use error::{CursorError, ValueTypeError};
pub use param::Param;
pub use types::{FieldType, ScalarType};
pub use value::SqlValue;
