use serde::{Deserialize, Serialize};

use super::item::Item;
use super::search_query::SearchQuery;

/// Envelope returned by `/api/search` for both live and fallback results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub keyword: String,
    pub page: u32,
    pub total_items: usize,
    pub items: Vec<Item>,
}

impl SearchResult {
    pub fn live(query: SearchQuery, items: Vec<Item>) -> Self {
        Self {
            success: true,
            error: None,
            keyword: query.keyword,
            page: query.page,
            total_items: items.len(),
            items,
        }
    }

    pub fn fallback(query: SearchQuery, error: &str, items: Vec<Item>) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            keyword: query.keyword,
            page: query.page,
            total_items: items.len(),
            items,
        }
    }
}
