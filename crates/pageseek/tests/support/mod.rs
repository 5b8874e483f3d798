//! An in-memory SELECT executor over the shared fixture rows.
//!
//! Evaluates the built AST with SQL semantics: three-valued logic in the
//! WHERE clause and the engine's normalized NULL placement in ORDER BY.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use model::core::value::Value;
use model::pagination::sort::SortDirection;
use model::records::row::Row;
use pageseek::ExecuteQuery;
use query_builder::ast::common::{LimitStyle, NullsOrder};
use query_builder::ast::expr::{BinaryOperator, Expr};
use query_builder::ast::select::OrderByExpr;
use query_builder::build::select::{FromState, SelectBuilder};
use query_builder::dsl::QueryDsl;
use query_builder::{ident, table_ref};
use std::cmp::Ordering;

/// The reference fixture: 15 users, dates spanning ten days (ids 11..15
/// repeat the first five days), seven NULL ratings on the even ids, and
/// every third user inactive.
pub fn seed_rows() -> Vec<Row> {
    const NAMES: [&str; 15] = [
        "Ava", "Ben", "Cara", "Dan", "Elle", "Finn", "Gia", "Hank", "Ivy", "Jack", "Kira",
        "Liam", "Mia", "Noah", "Oli",
    ];
    (1..=15i64)
        .map(|id| {
            let day = ((id - 1) % 10) as u32;
            let created_at = Utc.with_ymd_and_hms(2024, 3, 1 + day, 8, 0, 0).unwrap();
            let rating = if id % 2 == 0 {
                Value::Null
            } else {
                Value::Float((id % 5) as f64 + 0.5)
            };
            Row::default()
                .field("id", id)
                .field("name", NAMES[(id - 1) as usize])
                .field("created_at", created_at)
                .field("rating", rating)
                .field("active", id % 3 != 0)
        })
        .collect()
}

pub fn row_with_id(id: i64) -> Row {
    seed_rows()
        .into_iter()
        .find(|row| row.get_value("id") == Value::Int(id))
        .expect("fixture id")
}

#[derive(Debug, thiserror::Error)]
#[error("memory query failed: {0}")]
pub struct MemQueryError(pub String);

/// A lazy SELECT handle over in-memory rows.
#[derive(Debug, Clone)]
pub struct MemQuery {
    builder: SelectBuilder<FromState>,
    rows: Vec<Row>,
}

impl MemQuery {
    pub fn new(rows: Vec<Row>) -> Self {
        MemQuery {
            builder: SelectBuilder::new()
                .select(vec![
                    ident("id"),
                    ident("name"),
                    ident("created_at"),
                    ident("rating"),
                    ident("active"),
                ])
                .from(table_ref!("users"), None),
            rows,
        }
    }

    pub fn seeded() -> Self {
        MemQuery::new(seed_rows())
    }
}

impl QueryDsl for MemQuery {
    fn and_where(mut self, predicate: Expr) -> Self {
        self.builder = self.builder.and_where(predicate);
        self
    }

    fn order_by(mut self, expr: Expr, direction: SortDirection, nulls: Option<NullsOrder>) -> Self {
        self.builder = self.builder.order_by(expr, direction, nulls);
        self
    }

    fn limit(mut self, limit: u64, style: LimitStyle) -> Self {
        self.builder = self.builder.limit(limit, style);
        self
    }

    fn offset(mut self, offset: u64) -> Self {
        self.builder = self.builder.offset(offset);
        self
    }
}

#[async_trait]
impl ExecuteQuery for MemQuery {
    type Error = MemQueryError;

    async fn execute(self) -> Result<Vec<Row>, MemQueryError> {
        let select = self.builder.build();

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in self.rows {
            let keep = match &select.where_clause {
                Some(predicate) => eval_bool(predicate, &row)? == Some(true),
                None => true,
            };
            if keep {
                rows.push(row);
            }
        }

        if !select.order_by.is_empty() {
            rows.sort_by(|a, b| compare_rows(a, b, &select.order_by));
        }

        let offset = select.offset.unwrap_or(0) as usize;
        let mut rows: Vec<Row> = rows.into_iter().skip(offset).collect();
        // TOP and FETCH cap the row count exactly like LIMIT once the
        // offset has been applied.
        if let Some(limit) = select.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

/// A handle whose execution always fails; exercises the error-wrapping path.
#[derive(Debug)]
pub struct FailingQuery;

impl QueryDsl for FailingQuery {
    fn and_where(self, _predicate: Expr) -> Self {
        self
    }

    fn order_by(self, _expr: Expr, _direction: SortDirection, _nulls: Option<NullsOrder>) -> Self {
        self
    }

    fn limit(self, _limit: u64, _style: LimitStyle) -> Self {
        self
    }

    fn offset(self, _offset: u64) -> Self {
        self
    }
}

#[async_trait]
impl ExecuteQuery for FailingQuery {
    type Error = MemQueryError;

    async fn execute(self) -> Result<Vec<Row>, MemQueryError> {
        Err(MemQueryError("connection reset by peer".into()))
    }
}

/// SQL three-valued evaluation; `None` is the SQL NULL truth value.
fn eval_bool(expr: &Expr, row: &Row) -> Result<Option<bool>, MemQueryError> {
    match expr {
        Expr::BinaryOp(op) => match op.op {
            BinaryOperator::And => {
                let left = eval_bool(&op.left, row)?;
                let right = eval_bool(&op.right, row)?;
                Ok(match (left, right) {
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    (Some(true), Some(true)) => Some(true),
                    _ => None,
                })
            }
            BinaryOperator::Or => {
                let left = eval_bool(&op.left, row)?;
                let right = eval_bool(&op.right, row)?;
                Ok(match (left, right) {
                    (Some(true), _) | (_, Some(true)) => Some(true),
                    (Some(false), Some(false)) => Some(false),
                    _ => None,
                })
            }
            comparison => {
                let left = eval_value(&op.left, row)?;
                let right = eval_value(&op.right, row)?;
                if left.is_null() || right.is_null() {
                    return Ok(None);
                }
                let ord = left.compare(&right).ok_or_else(|| {
                    MemQueryError(format!("cannot compare {left:?} with {right:?}"))
                })?;
                Ok(Some(match comparison {
                    BinaryOperator::Eq => ord == Ordering::Equal,
                    BinaryOperator::NotEq => ord != Ordering::Equal,
                    BinaryOperator::Lt => ord == Ordering::Less,
                    BinaryOperator::LtEq => ord != Ordering::Greater,
                    BinaryOperator::Gt => ord == Ordering::Greater,
                    BinaryOperator::GtEq => ord != Ordering::Less,
                    BinaryOperator::And | BinaryOperator::Or => unreachable!(),
                }))
            }
        },
        Expr::IsNull { expr, negated } => {
            let value = eval_value(expr, row)?;
            Ok(Some(value.is_null() != *negated))
        }
        Expr::Identifier(_) => match eval_value(expr, row)? {
            Value::Boolean(b) => Ok(Some(b)),
            Value::Null => Ok(None),
            other => Err(MemQueryError(format!("{other:?} is not a boolean"))),
        },
        other => Err(MemQueryError(format!(
            "unsupported boolean expression: {other:?}"
        ))),
    }
}

fn eval_value(expr: &Expr, row: &Row) -> Result<Value, MemQueryError> {
    match expr {
        Expr::Identifier(ident) => Ok(row.get_value(&ident.name)),
        Expr::Value(value) => Ok(value.clone()),
        Expr::Alias { expr, .. } => eval_value(expr, row),
        other => Err(MemQueryError(format!(
            "unsupported scalar expression: {other:?}"
        ))),
    }
}

fn compare_rows(a: &Row, b: &Row, order_by: &[OrderByExpr]) -> Ordering {
    for order in order_by {
        let left = eval_value(&order.expr, a).unwrap_or(Value::Null);
        let right = eval_value(&order.expr, b).unwrap_or(Value::Null);

        // Absent an explicit placement, the engines the fixture emulates
        // already sort NULLs first on Asc and last on Desc.
        let nulls_first = match order.nulls {
            Some(NullsOrder::First) => true,
            Some(NullsOrder::Last) => false,
            None => order.direction == SortDirection::Asc,
        };

        let ord = match (left.is_null(), right.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => {
                if nulls_first {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, true) => {
                if nulls_first {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, false) => {
                let ord = left.compare(&right).unwrap_or(Ordering::Equal);
                match order.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
