//! relq - typed query translation and cached entity marshaling.
//!
//! Callers express relational queries as composable, strongly-typed
//! filter/sort/paging expressions; relq translates them into textual SQL
//! predicates, converts raw tabular rows into typed entities, and converts
//! entities into bound query parameters. Command execution, sessions, and
//! transactions stay with the caller, reached only through the row-cursor
//! and parameter abstractions.
//!
//! - [`Query`]/[`Expr`] and [`Translator`]: expression trees and their
//!   translation to WHERE/paging/ordering text.
//! - [`Entity`] and [`MapperCache`]: per-type descriptor tables and the
//!   concurrent cache of compiled row/parameter mappers.
//! - [`SqlValue`], [`RowCursor`], [`Param`]: the shared runtime vocabulary.

pub use relq_types::{
    CursorError, FieldType, Param, RowCursor, ScalarType, SqlValue, ValueTypeError,
};

pub use relq_expr::{
    col, lit, sql_literal, BinaryOp, CaptureError, Captured, Expr, Query, SortDirection, Stage,
    TranslateError, Translation, Translator, UnaryOp,
};

pub use relq_map::{CacheStats, Entity, FieldDescriptor, MapError, MapperCache, ParamMapper, RowMapper};
