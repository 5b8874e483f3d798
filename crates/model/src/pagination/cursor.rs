use crate::core::value::Value;
use crate::pagination::sort::{sort_signature, SortField};
use crate::records::row::Row;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The decoded body of a continuation token.
///
/// `sig` fingerprints the sort set the token was minted under; `k` maps each
/// sort field's output key to the boundary row's value for that column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CursorPayload {
    pub sig: String,
    pub k: BTreeMap<String, Value>,
}

impl CursorPayload {
    /// Extracts the payload for a boundary row by reading each sort field's
    /// output key back out of the row.
    pub fn from_row(row: &Row, sorts: &[SortField]) -> Self {
        let k = sorts
            .iter()
            .map(|sort| {
                let key = sort.output_key();
                (key.to_string(), row.get_value(key))
            })
            .collect();
        CursorPayload {
            sig: sort_signature(sorts),
            k,
        }
    }
}

/// An incoming cursor, exactly one of the three shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PageCursor {
    #[serde(rename = "nextPage")]
    NextPage(String),
    #[serde(rename = "prevPage")]
    PrevPage(String),
    #[serde(rename = "offset")]
    Offset(u64),
}

/// The navigation kind of a decoded cursor, used as a hint when dialects
/// pick their row-limit syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Next,
    Prev,
    Offset,
}

/// A cursor after its token has been run through the codec chain.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedCursor {
    Next(CursorPayload),
    Prev(CursorPayload),
    Offset(u64),
}

impl DecodedCursor {
    pub fn kind(&self) -> CursorKind {
        match self {
            DecodedCursor::Next(_) => CursorKind::Next,
            DecodedCursor::Prev(_) => CursorKind::Prev,
            DecodedCursor::Offset(_) => CursorKind::Offset,
        }
    }

    pub fn is_backward(&self) -> bool {
        matches!(self, DecodedCursor::Prev(_))
    }

    pub fn payload(&self) -> Option<&CursorPayload> {
        match self {
            DecodedCursor::Next(payload) | DecodedCursor::Prev(payload) => Some(payload),
            DecodedCursor::Offset(_) => None,
        }
    }
}
