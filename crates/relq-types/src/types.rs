//! Semantic types for entity fields and query literals.

use std::fmt;

/// Scalar data types understood by the SQL backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// Boolean value.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point.
    Float64,
    /// UTF-8 string.
    String,
    /// Binary data.
    Bytes,
    /// Timestamp (microseconds since Unix epoch).
    Timestamp,
    /// UUID (128-bit identifier).
    Uuid,
}

/// The declared type of an entity field.
///
/// Payloads are `'static` so descriptor tables can live in consts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A scalar value.
    Scalar(ScalarType),
    /// A nullable scalar value (an unset field reads as null).
    Optional(ScalarType),
    /// A nested entity. Has no literal rendering and no parameter
    /// representation.
    Embedded {
        /// Name of the embedded entity type.
        entity: &'static str,
    },
}

impl ScalarType {
    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ScalarType::Int32 | ScalarType::Int64 | ScalarType::Float64
        )
    }
}

impl FieldType {
    /// Check if this type is nullable.
    pub fn is_nullable(&self) -> bool {
        matches!(self, FieldType::Optional(_))
    }

    /// Get the inner scalar type if this is a scalar-based type.
    ///
    /// The nullable wrapper is transparent here: an `Optional(Int32)` and a
    /// `Scalar(Int32)` report the same scalar.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            FieldType::Scalar(s) | FieldType::Optional(s) => Some(*s),
            FieldType::Embedded { .. } => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Bool => "bool",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Float64 => "float64",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
            ScalarType::Timestamp => "timestamp",
            ScalarType::Uuid => "uuid",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(s) => write!(f, "{}", s),
            FieldType::Optional(s) => write!(f, "{}?", s),
            FieldType::Embedded { entity } => write!(f, "embedded {}", entity),
        }
    }
}
