use crate::{Codec, Paginator};
use model::error::PaginationError;
use model::pagination::cursor::{CursorPayload, DecodedCursor};
use model::pagination::page::Page;
use model::pagination::sort::SortField;
use model::records::row::Row;
use query_builder::dialect::Dialect;

/// Extracts the boundary payload for a row under the original (uninverted)
/// sort set.
pub fn resolve_cursor(row: &Row, sorts: &[SortField]) -> CursorPayload {
    CursorPayload::from_row(row, sorts)
}

impl<D, C> Paginator<D, C>
where
    D: Dialect,
    C: Codec<Input = CursorPayload, Output = String>,
{
    /// Builds the outgoing page from the final slice.
    ///
    /// `next_page` anchors on the page end; arriving backward proves a
    /// forward page exists, while the over-fetch bit proves one in the
    /// direction of travel. `prev_page` is suppressed on a first page.
    pub(crate) async fn emit_tokens(
        &self,
        items: Vec<Row>,
        sorts: &[SortField],
        decoded: Option<&DecodedCursor>,
        over_fetched: bool,
    ) -> Result<Page, PaginationError> {
        if items.is_empty() {
            return Ok(Page::empty());
        }

        let start_cursor = self
            .encode_token(resolve_cursor(&items[0], sorts))
            .await?;
        let end_cursor = self
            .encode_token(resolve_cursor(&items[items.len() - 1], sorts))
            .await?;

        let inverted = matches!(decoded, Some(DecodedCursor::Prev(_)));
        let is_first = match decoded {
            None => true,
            Some(DecodedCursor::Offset(0)) => true,
            Some(_) => false,
        };

        let prev_page = ((!inverted || over_fetched) && !is_first).then(|| start_cursor.clone());
        let next_page = (inverted || over_fetched).then(|| end_cursor.clone());

        Ok(Page {
            has_next_page: next_page.is_some(),
            has_prev_page: prev_page.is_some(),
            items,
            start_cursor: Some(start_cursor),
            end_cursor: Some(end_cursor),
            next_page,
            prev_page,
        })
    }
}
