//! Translation of query pipelines into SQL predicate text.

use relq_types::SqlValue;

use crate::ast::{BinaryOp, Expr, Query, Stage, UnaryOp};
use crate::error::TranslateError;
use crate::eval;
use crate::format;

/// The result of translating one query pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// The WHERE fragment (without the `WHERE` keyword). Empty when the
    /// pipeline has no `Where` stage.
    pub where_clause: String,
    /// Row count to skip, when a `Skip` stage was present.
    pub skip: Option<u64>,
    /// Row count to take, when a `Take` stage was present.
    pub take: Option<u64>,
    /// Comma-joined `<column> ASC|DESC` terms, in chain order. Empty when no
    /// ordering stage was present.
    pub order_by: String,
}

/// A single-use walker over one query pipeline.
///
/// The walk accumulates into a private buffer, so a translator serves exactly
/// one [`translate`](Translator::translate) call; translation consumes it.
#[derive(Debug, Default)]
pub struct Translator {
    sql: String,
    skip: Option<u64>,
    take: Option<u64>,
    order: Vec<String>,
}

impl Translator {
    /// Create a fresh translator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the pipeline and produce its translation.
    pub fn translate(mut self, query: &Query) -> Result<Translation, TranslateError> {
        for stage in &query.stages {
            match stage {
                Stage::Where(predicate) => {
                    // Additional Where stages combine conjunctively.
                    if !self.sql.is_empty() {
                        self.sql.push_str(" AND ");
                    }
                    self.visit(predicate)?;
                }
                Stage::Skip(arg) => self.skip = Some(paging_count("Skip", arg)?),
                Stage::Take(arg) => self.take = Some(paging_count("Take", arg)?),
                Stage::OrderBy { key, direction } => match key {
                    Expr::Column(name) => {
                        self.order.push(format!("{} {}", name, direction.keyword()));
                    }
                    _ => {
                        return Err(TranslateError::UnsupportedOperation(
                            stage.name().to_string(),
                        ))
                    }
                },
                Stage::Custom { name } => {
                    return Err(TranslateError::UnsupportedOperation(name.clone()))
                }
            }
        }

        Ok(Translation {
            where_clause: self.sql,
            skip: self.skip,
            take: self.take,
            order_by: self.order.join(", "),
        })
    }

    fn visit(&mut self, expr: &Expr) -> Result<(), TranslateError> {
        match expr {
            Expr::Binary { op, left, right } => {
                // Parenthesize every binary node so precedence is textual.
                self.sql.push('(');
                self.visit(left)?;
                self.sql.push_str(operator_text(*op, right)?);
                self.visit(right)?;
                self.sql.push(')');
            }
            Expr::Unary { op, operand } => match op {
                UnaryOp::Not => {
                    self.sql.push_str("NOT ");
                    self.visit(operand)?;
                }
                UnaryOp::Convert => self.visit(operand)?,
                UnaryOp::Negate => {
                    return Err(TranslateError::UnsupportedOperator(op.symbol()))
                }
            },
            Expr::Column(name) => self.sql.push_str(name),
            Expr::Captured(capture) => {
                let value = eval::evaluate(capture)?;
                self.sql.push_str(&format::sql_literal(&value)?);
            }
            Expr::Literal(value) => self.sql.push_str(&format::sql_literal(value)?),
        }
        Ok(())
    }
}

/// SQL text for a binary operator, with null-aware equality.
fn operator_text(op: BinaryOp, right: &Expr) -> Result<&'static str, TranslateError> {
    let text = match op {
        BinaryOp::And => " AND ",
        BinaryOp::Or => " OR ",
        BinaryOp::Eq => {
            if is_null_literal(right) {
                " IS "
            } else {
                " = "
            }
        }
        BinaryOp::Ne => {
            if is_null_literal(right) {
                " IS NOT "
            } else {
                " <> "
            }
        }
        BinaryOp::Lt => " < ",
        BinaryOp::Le => " <= ",
        BinaryOp::Gt => " > ",
        BinaryOp::Ge => " >= ",
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            return Err(TranslateError::UnsupportedOperator(op.symbol()))
        }
    };
    Ok(text)
}

/// Only literal null constants switch `=`/`<>` to `IS`/`IS NOT`. A captured
/// value that happens to be null renders the `NULL` token instead.
fn is_null_literal(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(SqlValue::Null))
}

/// Extract a literal non-negative integer paging argument.
fn paging_count(stage: &'static str, arg: &Expr) -> Result<u64, TranslateError> {
    let count = match arg {
        Expr::Literal(SqlValue::Int32(i)) => i64::from(*i),
        Expr::Literal(SqlValue::Int64(i)) => *i,
        _ => return Err(TranslateError::NonConstantPagingArgument { stage }),
    };
    u64::try_from(count).map_err(|_| TranslateError::NonConstantPagingArgument { stage })
}
