//! Database-specific SQL syntax and the shared pagination operations.

use crate::ast::common::{LimitStyle, NullsOrder};
use crate::ast::expr::{Expr, Ident};
use crate::dsl::QueryDsl;
use crate::keyset::{keyset_predicate, KeysetError};
use model::pagination::cursor::{CursorKind, CursorPayload};
use model::pagination::sort::{SortDirection, SortField};

/// Per-engine syntax choices.
///
/// The pagination operations themselves ([`apply_sort`], [`apply_limit`],
/// [`apply_offset`], [`apply_cursor`]) are shared; a dialect only decides
/// identifier quoting, placeholder spelling, whether NULL placement must be
/// spelled out, and how the row limit is written.
pub trait Dialect: Send + Sync {
    /// Wraps an identifier in the dialect's quoting characters.
    ///
    /// - PostgreSQL and SQLite use double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    /// - SQL Server uses brackets: `[my_column]`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL and SQLite use `?`
    /// - SQL Server uses `@p1`, `@p2`, etc.
    fn placeholder(&self, index: usize) -> String;

    /// Explicit NULL placement for an ORDER BY entry, or `None` when the
    /// engine default already matches Asc/NULLS FIRST, Desc/NULLS LAST.
    fn sort_nulls(&self, _direction: SortDirection) -> Option<NullsOrder> {
        None
    }

    /// How this dialect spells the row limit, given the navigation kind of
    /// the incoming cursor.
    fn limit_style(&self, _cursor: Option<CursorKind>) -> LimitStyle {
        LimitStyle::Limit
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    // PostgreSQL defaults to NULLS LAST on Asc and NULLS FIRST on Desc,
    // the opposite of the engine convention, so both get spelled out.
    fn sort_nulls(&self, direction: SortDirection) -> Option<NullsOrder> {
        Some(match direction {
            SortDirection::Asc => NullsOrder::First,
            SortDirection::Desc => NullsOrder::Last,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{ident}`")
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".into()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{ident}]")
    }

    fn placeholder(&self, index: usize) -> String {
        format!("@p{}", index + 1)
    }

    fn limit_style(&self, cursor: Option<CursorKind>) -> LimitStyle {
        match cursor {
            // OFFSET pagination needs the OFFSET ... FETCH form; TOP cannot
            // combine with OFFSET.
            Some(CursorKind::Offset) => LimitStyle::Fetch,
            _ => LimitStyle::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".into()
    }
}

/// Appends each sort field's ORDER BY entry with the dialect's NULL
/// placement.
pub fn apply_sort<Q: QueryDsl>(dialect: &dyn Dialect, query: Q, sorts: &[SortField]) -> Q {
    sorts.iter().fold(query, |q, sort| {
        q.order_by(
            Expr::Identifier(Ident::parse(&sort.column)),
            sort.direction,
            dialect.sort_nulls(sort.direction),
        )
    })
}

/// Appends the row limit in the dialect's spelling for this navigation kind.
pub fn apply_limit<Q: QueryDsl>(
    dialect: &dyn Dialect,
    query: Q,
    limit: u64,
    cursor: Option<CursorKind>,
) -> Q {
    query.limit(limit, dialect.limit_style(cursor))
}

/// Appends the row offset.
pub fn apply_offset<Q: QueryDsl>(query: Q, offset: u64) -> Q {
    query.offset(offset)
}

/// Appends the keyset WHERE predicate for a decoded boundary payload.
pub fn apply_cursor<Q: QueryDsl>(
    query: Q,
    sorts: &[SortField],
    payload: &CursorPayload,
) -> Result<Q, KeysetError> {
    let predicate = keyset_predicate(sorts, payload)?;
    Ok(query.and_where(predicate))
}
