//! Keyset pagination over an external SELECT builder.
//!
//! The paginator takes a lazy query handle, an ordered sort key list whose
//! last entry uniquely identifies a row, a page size, and an optional
//! opaque cursor. It applies the dialect's ORDER BY / limit / WHERE stages,
//! over-fetches by one row to detect further pages, and emits continuation
//! tokens through a composable codec chain.

use async_trait::async_trait;
use codec::{Base64Codec, CodecExt, JsonCodec, Pipe};
use model::pagination::cursor::{CursorPayload, PageCursor};
use model::pagination::sort::SortField;
use model::records::row::Row;
use query_builder::dsl::QueryDsl;

mod paginate;
mod tokens;

pub use codec::Codec;
pub use model::error::{ErrorCode, PaginationError};
pub use model::pagination::page::{Edge, Page, PageWithEdges};
pub use query_builder::dialect::{Dialect, MySql, Postgres, Sqlite, SqlServer};
pub use tokens::resolve_cursor;

/// A query handle the paginator can both shape and run.
///
/// Implementations wrap a concrete SELECT builder plus whatever driver
/// executes it; the handle stays lazy until `execute`.
#[async_trait]
pub trait ExecuteQuery: QueryDsl {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(self) -> Result<Vec<Row>, Self::Error>;
}

/// Everything one `paginate` call needs.
#[derive(Debug)]
pub struct PageRequest<Q> {
    pub query: Q,
    pub sorts: Vec<SortField>,
    pub limit: i64,
    pub cursor: Option<PageCursor>,
}

/// The default token chain: type-preserving JSON inside URL-safe armor.
pub type DefaultTokenCodec = Pipe<JsonCodec<CursorPayload>, Base64Codec>;

pub fn default_token_codec() -> DefaultTokenCodec {
    JsonCodec::new().pipe(Base64Codec)
}

/// The pagination engine for one dialect and one token codec.
///
/// Immutable and freely shareable; every call owns its query handle.
#[derive(Debug, Clone)]
pub struct Paginator<D, C> {
    dialect: D,
    codec: C,
}

impl<D: Dialect> Paginator<D, DefaultTokenCodec> {
    pub fn new(dialect: D) -> Self {
        Paginator {
            dialect,
            codec: default_token_codec(),
        }
    }
}

impl<D, C> Paginator<D, C>
where
    D: Dialect,
    C: Codec<Input = CursorPayload, Output = String>,
{
    /// Builds a paginator with a custom token chain, e.g. one ending in a
    /// cipher or stash stage.
    pub fn with_codec(dialect: D, codec: C) -> Self {
        Paginator { dialect, codec }
    }
}
