//! Rendering runtime values as SQL literals.

use chrono::DateTime;
use relq_types::SqlValue;

use crate::error::TranslateError;

/// Render a runtime value as a SQL literal.
///
/// Strings, timestamps, and UUIDs are single-quoted; booleans render as
/// `1`/`0`; numerics as unquoted decimal text; null as the `NULL` token. The
/// rendering is selected by the value's semantic type (its variant), so a
/// value read out of a nullable wrapper formats identically to a bare one.
pub fn sql_literal(value: &SqlValue) -> Result<String, TranslateError> {
    Ok(match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(true) => "1".to_string(),
        SqlValue::Bool(false) => "0".to_string(),
        SqlValue::Int32(i) => i.to_string(),
        SqlValue::Int64(i) => i.to_string(),
        SqlValue::Float64(f) => f.to_string(),
        SqlValue::String(s) => quoted(s),
        SqlValue::Timestamp(us) => quoted(&timestamp_text(*us)?),
        SqlValue::Uuid(bytes) => quoted(&uuid_text(bytes)),
        SqlValue::Bytes(_) => {
            return Err(TranslateError::UnsupportedLiteralType(value.type_name()))
        }
    })
}

/// Single-quote a string, doubling embedded quotes.
fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS.ffffff` (UTC).
pub(crate) fn timestamp_text(micros: i64) -> Result<String, TranslateError> {
    let dt = DateTime::from_timestamp_micros(micros)
        .ok_or(TranslateError::UnsupportedLiteralType("timestamp"))?;
    Ok(dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string())
}

/// Render a UUID as hyphenated lowercase hex.
pub(crate) fn uuid_text(bytes: &[u8; 16]) -> String {
    let h = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &h[0..8],
        &h[8..12],
        &h[12..16],
        &h[16..20],
        &h[20..32]
    )
}
