use crate::records::row::Row;
use serde::{Deserialize, Serialize};

/// One page of results with its navigation anchors.
///
/// `start_cursor`/`end_cursor` anchor the first and last emitted item;
/// `next_page`/`prev_page` are only present when navigation in that
/// direction is known to yield rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Row>,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
}

impl Page {
    /// The page for an empty result set: no items, no anchors.
    pub fn empty() -> Self {
        Page::default()
    }
}

/// A row paired with the token that would resume right after it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub node: Row,
    pub cursor: String,
}

/// A [`Page`] extended with per-item edges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageWithEdges {
    #[serde(flatten)]
    pub page: Page,
    pub edges: Vec<Edge>,
}
