//! Error types for query translation.

use thiserror::Error;

/// Failure evaluating a captured sub-expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// An intermediate link of the member path was unset.
    #[error("member path is nil at '{0}'")]
    NilPath(String),
    /// The capture computation itself failed.
    #[error("capture evaluation failed: {0}")]
    Eval(String),
}

/// Errors surfaced while translating a query pipeline.
///
/// All are synchronous and non-recoverable; each names the offending
/// construct.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Unrecognized pipeline stage.
    #[error("the query operation '{0}' is not supported")]
    UnsupportedOperation(String),
    /// Unrecognized binary or unary operator.
    #[error("the operator '{0}' is not supported")]
    UnsupportedOperator(&'static str),
    /// A leaf value's type has no SQL literal rendering.
    #[error("no SQL literal rendering for {0} values")]
    UnsupportedLiteralType(&'static str),
    /// Evaluating a captured-value expression failed.
    #[error("the member '{member}' is not supported")]
    UnsupportedMember {
        /// The member being evaluated.
        member: String,
        /// The underlying evaluation failure.
        #[source]
        source: CaptureError,
    },
    /// The argument to `Take`/`Skip` was not a literal integer.
    #[error("the argument to '{stage}' must be a constant non-negative integer")]
    NonConstantPagingArgument {
        /// The paging stage name.
        stage: &'static str,
    },
}
