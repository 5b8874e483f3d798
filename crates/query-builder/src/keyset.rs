//! Keyset predicate synthesis.
//!
//! Given the applied sort set and a decoded cursor payload, builds the
//! boolean WHERE tree selecting the rows strictly beyond the boundary row.
//! NULL ordering follows the engine-wide convention: Asc sorts NULLs first,
//! Desc sorts NULLs last, on every dialect.

use crate::ast::expr::{BinaryOperator, Expr, Ident};
use model::pagination::cursor::CursorPayload;
use model::pagination::sort::{SortDirection, SortField};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeysetError {
    /// The payload lacks a key the sort set expects; the token was minted
    /// under a different column selection.
    #[error("missing cursor value for {0:?}")]
    MissingCursorValue(String),

    /// Asked for a predicate past the end of the sort set; an internal bug,
    /// never a client error.
    #[error("sort index {index} out of bounds for {len} sort fields")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Builds the full keyset predicate for a sort set and boundary payload.
pub fn keyset_predicate(
    sorts: &[SortField],
    payload: &CursorPayload,
) -> Result<Expr, KeysetError> {
    predicate_from(sorts, payload, 0)
}

fn predicate_from(
    sorts: &[SortField],
    payload: &CursorPayload,
    index: usize,
) -> Result<Expr, KeysetError> {
    let sort = sorts.get(index).ok_or(KeysetError::IndexOutOfBounds {
        index,
        len: sorts.len(),
    })?;

    let key = sort.output_key();
    let boundary = payload
        .k
        .get(key)
        .ok_or_else(|| KeysetError::MissingCursorValue(key.to_string()))?;

    let column = || Expr::Identifier(Ident::parse(&sort.column));
    let cmp = match sort.direction {
        SortDirection::Asc => BinaryOperator::Gt,
        SortDirection::Desc => BinaryOperator::Lt,
    };

    // The last field is the unique tie-breaker: strict inequality alone is
    // both sufficient and gap-free.
    if index == sorts.len() - 1 {
        return Ok(Expr::binary(column(), cmp, Expr::Value(boundary.clone())));
    }

    let next = predicate_from(sorts, payload, index + 1)?;

    if boundary.is_null() {
        // Among equal (null) keys, the tie-break recurses.
        let within_nulls = column().is_null().and(next);
        match sort.direction {
            // Asc places nulls first: every non-null row lies beyond a null
            // boundary.
            SortDirection::Asc => Ok(within_nulls.or(column().is_not_null())),
            // Desc places nulls last: nothing non-null follows a null
            // boundary.
            SortDirection::Desc => Ok(within_nulls),
        }
    } else {
        let beyond = Expr::binary(column(), cmp, Expr::Value(boundary.clone())).or(
            Expr::binary(column(), BinaryOperator::Eq, Expr::Value(boundary.clone())).and(next),
        );
        match sort.direction {
            SortDirection::Asc => Ok(beyond),
            // Desc places nulls last, so they follow any non-null boundary.
            SortDirection::Desc => Ok(beyond.or(column().is_null())),
        }
    }
}
