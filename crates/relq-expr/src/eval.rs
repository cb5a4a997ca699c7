//! Partial evaluation of captured sub-expressions.
//!
//! A [`Captured`] node closes over enclosing-scope values as a zero-argument
//! computation. Evaluation runs that computation immediately; any failure is
//! wrapped as [`TranslateError::UnsupportedMember`], naming the member.

use relq_types::SqlValue;

use crate::ast::Captured;
use crate::error::TranslateError;

/// Evaluate a captured sub-expression down to a concrete value.
pub fn evaluate(capture: &Captured) -> Result<SqlValue, TranslateError> {
    capture
        .resolve()
        .map_err(|source| TranslateError::UnsupportedMember {
            member: capture.member().to_string(),
            source,
        })
}
