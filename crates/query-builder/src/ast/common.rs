//! Common, reusable AST nodes shared by the SELECT builder.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}

/// Explicit NULL placement for an ORDER BY entry.
///
/// Only emitted where the engine default disagrees with the engine-wide
/// convention (Asc with NULLS FIRST, Desc with NULLS LAST).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

/// How the row limit is spelled in SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT n` (PostgreSQL, MySQL, SQLite).
    #[default]
    Limit,
    /// `SELECT TOP n` (SQL Server keyset paging).
    Top,
    /// `OFFSET n ROWS FETCH NEXT m ROWS ONLY` (SQL Server with offsets).
    Fetch,
}
