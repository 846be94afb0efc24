use serde_json::Value;

use crate::models::SearchQuery;
use super::client::UpstreamClient;
use super::error::UpstreamError;

pub const WARE_SEARCH_ENDPOINT: &str = "/api/item/wareSearch";

/// Query the upstream product search for one page of results.
/// Returns the raw payload; shaping it into items is the mapper's job.
pub async fn ware_search(client: &UpstreamClient, query: &SearchQuery) -> Result<Value, UpstreamError> {
    let params = [
        ("keyword", query.keyword.clone()),
        ("page", query.page.to_string()),
    ];
    client.get_json(WARE_SEARCH_ENDPOINT, &params).await
}
