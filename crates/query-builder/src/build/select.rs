//! A type-safe, fluent builder for constructing `Select` ASTs.

// --- Typestate Marker Structs ---
// These zero-sized structs represent the state of the builder and keep the
// clauses in valid SQL order at compile time.

use crate::ast::{
    common::{LimitStyle, NullsOrder, TableRef},
    expr::Expr,
    select::{FromClause, OrderByExpr, Select},
};
use crate::dsl::QueryDsl;
use model::pagination::sort::SortDirection;

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: State,
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            state: InitialState,
        }
    }

    /// Adds a `SELECT` clause with a list of columns; the entry point for
    /// building a query.
    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        SelectBuilder {
            ast: self.ast,
            state: SelectState,
        }
    }
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        SelectBuilder::new()
    }
}

impl SelectBuilder<SelectState> {
    /// Adds a `FROM` clause specifying the primary table.
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(String::from),
        });
        SelectBuilder {
            ast: self.ast,
            state: FromState,
        }
    }
}

impl SelectBuilder<FromState> {
    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }
}

impl QueryDsl for SelectBuilder<FromState> {
    fn and_where(mut self, predicate: Expr) -> Self {
        self.ast.where_clause = match self.ast.where_clause.take() {
            Some(existing) => Some(existing.and(predicate)),
            None => Some(predicate),
        };
        self
    }

    fn order_by(mut self, expr: Expr, direction: SortDirection, nulls: Option<NullsOrder>) -> Self {
        self.ast.order_by.push(OrderByExpr {
            expr,
            direction,
            nulls,
        });
        self
    }

    fn limit(mut self, limit: u64, style: LimitStyle) -> Self {
        self.ast.limit = Some(limit);
        self.ast.limit_style = style;
        self
    }

    fn offset(mut self, offset: u64) -> Self {
        self.ast.offset = Some(offset);
        self
    }
}
