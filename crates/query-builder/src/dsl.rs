//! The builder contract the pagination engine programs against.

use crate::ast::common::{LimitStyle, NullsOrder};
use crate::ast::expr::Expr;
use model::pagination::sort::SortDirection;

/// The four operations the engine needs from any SELECT builder.
///
/// Every method returns a new, equivalent handle; implementations must stay
/// lazy, executing nothing until the caller's own execution step.
pub trait QueryDsl: Sized + Send {
    /// Conjoins `predicate` with any WHERE clause already present.
    fn and_where(self, predicate: Expr) -> Self;

    /// Appends one ORDER BY entry, with explicit NULL placement when the
    /// dialect requires it.
    fn order_by(self, expr: Expr, direction: SortDirection, nulls: Option<NullsOrder>) -> Self;

    /// Sets the row limit, spelled per the dialect's chosen style.
    fn limit(self, limit: u64, style: LimitStyle) -> Self;

    /// Sets the row offset.
    fn offset(self, offset: u64) -> Self;
}
