//! Query expression trees and their translation to SQL predicates.
//!
//! A caller-facing query surface builds an [`Expr`] predicate plus a chain of
//! pipeline [`Stage`]s ([`Query`]), and a single-use [`Translator`] walks the
//! tree into a WHERE fragment with paging and ordering metadata
//! ([`Translation`]). Captured outer-scope values embedded in the tree are
//! partially evaluated during the walk and rendered as SQL literals.

pub mod ast;
pub mod error;
pub mod eval;
pub mod format;
pub mod translate;

pub use ast::{col, lit, BinaryOp, Captured, Expr, Query, SortDirection, Stage, UnaryOp};
pub use error::{CaptureError, TranslateError};
pub use format::sql_literal;
pub use translate::{Translation, Translator};
