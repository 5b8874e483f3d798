use crate::tokens::resolve_cursor;
use crate::{Codec, ExecuteQuery, PageRequest, Paginator};
use model::error::PaginationError;
use model::pagination::cursor::{CursorPayload, DecodedCursor, PageCursor};
use model::pagination::page::{Edge, Page, PageWithEdges};
use model::pagination::sort::{invert_sorts, sort_signature};
use model::records::row::Row;
use query_builder::dialect::{apply_cursor, apply_limit, apply_offset, apply_sort, Dialect};
use tracing::{debug, warn};

impl<D, C> Paginator<D, C>
where
    D: Dialect,
    C: Codec<Input = CursorPayload, Output = String>,
{
    /// Fetches one page and its navigation tokens.
    ///
    /// Backward navigation runs the forward machinery against the inverted
    /// sort set and reverses the slice afterwards, so callers always
    /// receive items in the requested order.
    pub async fn paginate<Q>(&self, request: PageRequest<Q>) -> Result<Page, PaginationError>
    where
        Q: ExecuteQuery,
    {
        let PageRequest {
            query,
            sorts,
            limit,
            cursor,
        } = request;

        if limit <= 0 {
            return Err(PaginationError::invalid_limit("Invalid page size limit"));
        }
        if sorts.is_empty() {
            return Err(PaginationError::invalid_sort("Cannot paginate without sorting"));
        }

        let decoded = match cursor {
            Some(cursor) => Some(self.decode_cursor(cursor).await?),
            None => None,
        };

        let backward = decoded
            .as_ref()
            .map(DecodedCursor::is_backward)
            .unwrap_or(false);
        let sorts_applied = if backward {
            invert_sorts(&sorts)
        } else {
            sorts.clone()
        };

        debug!(limit, sort_fields = sorts.len(), backward, "paginating query");

        // Over-fetch by one row: its presence is the has-more bit.
        let fetch_limit = limit as u64 + 1;
        let kind = decoded.as_ref().map(DecodedCursor::kind);

        let mut query = apply_sort(&self.dialect, query, &sorts_applied);
        query = apply_limit(&self.dialect, query, fetch_limit, kind);

        if let Some(decoded) = &decoded {
            match decoded {
                DecodedCursor::Offset(offset) => {
                    query = apply_offset(query, *offset);
                }
                DecodedCursor::Next(payload) | DecodedCursor::Prev(payload) => {
                    let expected = sort_signature(&sorts);
                    if payload.sig != expected {
                        warn!(
                            token_sig = %payload.sig,
                            expected_sig = %expected,
                            "cursor was minted under a different sort order"
                        );
                        return Err(PaginationError::invalid_token(
                            "Page token does not match sort order",
                        ));
                    }
                    query = apply_cursor(query, &sorts_applied, payload).map_err(|e| {
                        PaginationError::unexpected("Failed to paginate").with_source(e)
                    })?;
                }
            }
        }

        let rows = query
            .execute()
            .await
            .map_err(|e| PaginationError::unexpected("Failed to paginate").with_source(e))?;

        let over_fetched = rows.len() as u64 > limit as u64;
        let mut items: Vec<Row> = rows;
        items.truncate(limit as usize);
        if backward {
            items.reverse();
        }

        self.emit_tokens(items, &sorts, decoded.as_ref(), over_fetched)
            .await
    }

    /// [`Self::paginate`], plus a per-item edge carrying each row's own
    /// resume token.
    pub async fn paginate_with_edges<Q>(
        &self,
        request: PageRequest<Q>,
    ) -> Result<PageWithEdges, PaginationError>
    where
        Q: ExecuteQuery,
    {
        let sorts = request.sorts.clone();
        let page = self.paginate(request).await?;

        let mut edges = Vec::with_capacity(page.items.len());
        for node in &page.items {
            let cursor = self
                .codec
                .encode(resolve_cursor(node, &sorts))
                .await
                .map_err(|e| {
                    PaginationError::unexpected("Failed to generate edges").with_source(e)
                })?;
            edges.push(Edge {
                node: node.clone(),
                cursor,
            });
        }
        Ok(PageWithEdges { page, edges })
    }

    async fn decode_cursor(&self, cursor: PageCursor) -> Result<DecodedCursor, PaginationError> {
        match cursor {
            PageCursor::Offset(offset) => Ok(DecodedCursor::Offset(offset)),
            PageCursor::NextPage(token) => Ok(DecodedCursor::Next(self.decode_token(token).await?)),
            PageCursor::PrevPage(token) => Ok(DecodedCursor::Prev(self.decode_token(token).await?)),
        }
    }

    async fn decode_token(&self, token: String) -> Result<CursorPayload, PaginationError> {
        self.codec
            .decode(token)
            .await
            .map_err(|e| PaginationError::invalid_token("Failed to paginate").with_source(e))
    }

    pub(crate) async fn encode_token(
        &self,
        payload: CursorPayload,
    ) -> Result<String, PaginationError> {
        self.codec
            .encode(payload)
            .await
            .map_err(|e| PaginationError::unexpected("Failed to paginate").with_source(e))
    }
}
