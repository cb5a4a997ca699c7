//! Query expression tree types.

use std::fmt;
use std::sync::Arc;

use relq_types::SqlValue;

use crate::error::CaptureError;

/// Binary operators a query surface may produce.
///
/// Only the logical and comparison operators translate to SQL; the
/// arithmetic operators are carried so a wider upstream surface can hand its
/// trees over unchanged, and fail with a named error at translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Logical conjunction.
    And,
    /// Logical disjunction.
    Or,
    /// Equality (`=`, or `IS` against a null literal).
    Eq,
    /// Inequality (`<>`, or `IS NOT` against a null literal).
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Addition. Not translatable.
    Add,
    /// Subtraction. Not translatable.
    Sub,
    /// Multiplication. Not translatable.
    Mul,
    /// Division. Not translatable.
    Div,
}

impl BinaryOp {
    /// Symbol used in diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical negation.
    Not,
    /// A type-conversion wrapper. Transparent to translation.
    Convert,
    /// Arithmetic negation. Not translatable.
    Negate,
}

impl UnaryOp {
    /// Symbol used in diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "NOT",
            UnaryOp::Convert => "Convert",
            UnaryOp::Negate => "-",
        }
    }
}

/// Sort direction for ordering stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A member access rooted outside the query's row parameter.
///
/// Holds the rightmost member name for diagnostics and a zero-argument
/// computation over the closed sub-expression. Chained property paths of any
/// depth thread through the computation, so the evaluator itself stays
/// independent of capture shape.
#[derive(Clone)]
pub struct Captured {
    member: String,
    resolve: Arc<dyn Fn() -> Result<SqlValue, CaptureError> + Send + Sync>,
}

impl Captured {
    /// Capture a computation over enclosing-scope values.
    pub fn new(
        member: impl Into<String>,
        resolve: impl Fn() -> Result<SqlValue, CaptureError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            member: member.into(),
            resolve: Arc::new(resolve),
        }
    }

    /// Capture an already-resolved value.
    pub fn value(member: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        let value = value.into();
        Self::new(member, move || Ok(value.clone()))
    }

    /// The rightmost member name of the access chain.
    pub fn member(&self) -> &str {
        &self.member
    }

    pub(crate) fn resolve(&self) -> Result<SqlValue, CaptureError> {
        (self.resolve)()
    }
}

impl fmt::Debug for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Captured").field(&self.member).finish()
    }
}

/// An immutable query predicate expression.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },
    /// A member access off the query's row parameter; emits the bare column
    /// name (case-sensitive).
    Column(String),
    /// A member access rooted in the enclosing scope; evaluated to a value
    /// during translation.
    Captured(Captured),
    /// A constant. The semantic type is carried by the value's variant.
    Literal(SqlValue),
}

impl Expr {
    fn binary(self, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// `self = other` (or `self IS other` against a null literal).
    pub fn eq(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Eq, other)
    }

    /// `self <> other` (or `self IS NOT other` against a null literal).
    pub fn ne(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Ne, other)
    }

    /// `self < other`.
    pub fn lt(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Lt, other)
    }

    /// `self <= other`.
    pub fn le(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Le, other)
    }

    /// `self > other`.
    pub fn gt(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Gt, other)
    }

    /// `self >= other`.
    pub fn ge(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Ge, other)
    }

    /// `self AND other`.
    pub fn and(self, other: Expr) -> Expr {
        self.binary(BinaryOp::And, other)
    }

    /// `self OR other`.
    pub fn or(self, other: Expr) -> Expr {
        self.binary(BinaryOp::Or, other)
    }

    /// `NOT self`.
    pub fn negate(self) -> Expr {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }

    /// Wrap in a transparent type-conversion node.
    pub fn convert(self) -> Expr {
        Expr::Unary {
            op: UnaryOp::Convert,
            operand: Box::new(self),
        }
    }
}

/// A member access off the query's row parameter.
pub fn col(name: impl Into<String>) -> Expr {
    Expr::Column(name.into())
}

/// A constant literal.
pub fn lit(value: impl Into<SqlValue>) -> Expr {
    Expr::Literal(value.into())
}

/// One chained operator of a query pipeline.
#[derive(Debug, Clone)]
pub enum Stage {
    /// Filter by a predicate.
    Where(Expr),
    /// Skip a literal number of rows.
    Skip(Expr),
    /// Take a literal number of rows.
    Take(Expr),
    /// Order by a row column.
    OrderBy {
        /// The key selector; must be a row-column access.
        key: Expr,
        /// Sort direction.
        direction: SortDirection,
    },
    /// An operator from a wider upstream surface that this translator does
    /// not understand. Always fails translation, naming the operation.
    Custom {
        /// The operation's name.
        name: String,
    },
}

impl Stage {
    /// The pipeline-stage name used in diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Stage::Where(_) => "Where",
            Stage::Skip(_) => "Skip",
            Stage::Take(_) => "Take",
            Stage::OrderBy {
                direction: SortDirection::Asc,
                ..
            } => "OrderBy",
            Stage::OrderBy {
                direction: SortDirection::Desc,
                ..
            } => "OrderByDescending",
            Stage::Custom { name } => name,
        }
    }
}

/// A query pipeline: an ordered chain of stages over one entity set.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Stages in chain order.
    pub stages: Vec<Stage>,
}

impl Query {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `Where` stage.
    pub fn filter(mut self, predicate: Expr) -> Self {
        self.stages.push(Stage::Where(predicate));
        self
    }

    /// Append a `Skip` stage with a literal count.
    pub fn skip(mut self, count: i64) -> Self {
        self.stages.push(Stage::Skip(lit(count)));
        self
    }

    /// Append a `Take` stage with a literal count.
    pub fn take(mut self, count: i64) -> Self {
        self.stages.push(Stage::Take(lit(count)));
        self
    }

    /// Append an ascending ordering stage.
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.stages.push(Stage::OrderBy {
            key: col(column),
            direction: SortDirection::Asc,
        });
        self
    }

    /// Append a descending ordering stage.
    pub fn order_by_desc(mut self, column: impl Into<String>) -> Self {
        self.stages.push(Stage::OrderBy {
            key: col(column),
            direction: SortDirection::Desc,
        });
        self
    }

    /// Append an arbitrary stage.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }
}
