//! Runtime values exchanged with the SQL backend.

use chrono::{DateTime, Utc};

use crate::error::ValueTypeError;
use crate::types::ScalarType;

/// A runtime value read from or bound into the SQL backend.
///
/// `Null` doubles as the null marker: a cursor yields it for SQL NULL and a
/// parameter carrying it binds NULL. Nullable entity fields flatten into
/// either `Null` or the inner scalar, so there is no wrapper variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Null / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit floating point.
    Float64(f64),
    /// UTF-8 string.
    String(String),
    /// Binary data.
    Bytes(Vec<u8>),
    /// Timestamp as microseconds since Unix epoch.
    Timestamp(i64),
    /// UUID as 16 bytes.
    Uuid([u8; 16]),
}

impl SqlValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Get a description of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int32(_) => "int32",
            SqlValue::Int64(_) => "int64",
            SqlValue::Float64(_) => "float64",
            SqlValue::String(_) => "string",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Timestamp(_) => "timestamp",
            SqlValue::Uuid(_) => "uuid",
        }
    }

    /// The scalar type of this value, if it has one (`Null` does not).
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            SqlValue::Null => None,
            SqlValue::Bool(_) => Some(ScalarType::Bool),
            SqlValue::Int32(_) => Some(ScalarType::Int32),
            SqlValue::Int64(_) => Some(ScalarType::Int64),
            SqlValue::Float64(_) => Some(ScalarType::Float64),
            SqlValue::String(_) => Some(ScalarType::String),
            SqlValue::Bytes(_) => Some(ScalarType::Bytes),
            SqlValue::Timestamp(_) => Some(ScalarType::Timestamp),
            SqlValue::Uuid(_) => Some(ScalarType::Uuid),
        }
    }

    /// Try to get as i64, widening from i32.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Int64(i) => Some(*i),
            SqlValue::Int32(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Build a timestamp value from a datetime.
    pub fn timestamp_from(dt: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(dt.timestamp_micros())
    }

    fn mismatch(&self, expected: &'static str) -> ValueTypeError {
        ValueTypeError {
            expected,
            got: self.type_name(),
        }
    }
}

impl TryFrom<SqlValue> for bool {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Bool(b) => Ok(b),
            other => Err(other.mismatch("bool")),
        }
    }
}

impl TryFrom<SqlValue> for i32 {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Int32(i) => Ok(i),
            other => Err(other.mismatch("int32")),
        }
    }
}

impl TryFrom<SqlValue> for i64 {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Int64(i) => Ok(i),
            // Widening from a 32-bit column is always lossless.
            SqlValue::Int32(i) => Ok(i as i64),
            other => Err(other.mismatch("int64")),
        }
    }
}

impl TryFrom<SqlValue> for f64 {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Float64(f) => Ok(f),
            other => Err(other.mismatch("float64")),
        }
    }
}

impl TryFrom<SqlValue> for String {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }
}

impl TryFrom<SqlValue> for Vec<u8> {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Bytes(b) => Ok(b),
            other => Err(other.mismatch("bytes")),
        }
    }
}

impl TryFrom<SqlValue> for [u8; 16] {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Uuid(u) => Ok(u),
            other => Err(other.mismatch("uuid")),
        }
    }
}

impl TryFrom<SqlValue> for DateTime<Utc> {
    type Error = ValueTypeError;

    fn try_from(value: SqlValue) -> Result<Self, Self::Error> {
        match value {
            SqlValue::Timestamp(us) => DateTime::from_timestamp_micros(us)
                .ok_or(ValueTypeError {
                    expected: "timestamp",
                    got: "timestamp out of range",
                }),
            other => Err(other.mismatch("timestamp")),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int32(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int64(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float64(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::String(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::String(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl From<[u8; 16]> for SqlValue {
    fn from(v: [u8; 16]) -> Self {
        SqlValue::Uuid(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::timestamp_from(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SqlValue::Null,
        }
    }
}
