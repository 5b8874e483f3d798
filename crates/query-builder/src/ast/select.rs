//! The AST for a SELECT query.

use crate::ast::{
    common::{LimitStyle, NullsOrder, TableRef},
    expr::Expr,
};
use model::pagination::sort::SortDirection;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    pub columns: Vec<Expr>,

    /// The primary table for the query.
    pub from: Option<FromClause>,

    /// The WHERE clause condition.
    pub where_clause: Option<Expr>,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,

    /// The row limit and how the dialect spells it.
    pub limit: Option<u64>,
    pub limit_style: LimitStyle,

    /// The OFFSET clause.
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: SortDirection,
    /// Explicit NULL placement; `None` leaves the engine default in force.
    pub nulls: Option<NullsOrder>,
}
