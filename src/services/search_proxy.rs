use std::time::Duration;

use crate::api::{ware_search, ClientBuildError, UpstreamClient, UpstreamError};
use crate::models::{Item, SearchQuery, SearchResult};
use super::item_mapper::map_items;
use super::mock_catalog::{mock_items, FALLBACK_ERROR};

/// Proxies one search to the upstream and never fails: upstream problems
/// come back as the mock catalog with `success: false`.
#[derive(Clone, Debug)]
pub struct SearchProxy {
    client: UpstreamClient,
}

impl SearchProxy {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    pub fn from_config(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        Ok(Self::new(UpstreamClient::new(base_url, timeout)?))
    }

    pub fn upstream_base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Run one search. Makes exactly one outbound request.
    pub async fn search(&self, query: SearchQuery) -> SearchResult {
        match self.fetch_items(&query).await {
            Ok(items) => {
                tracing::debug!(keyword = %query.keyword, page = query.page, count = items.len(), "Upstream search succeeded");
                SearchResult::live(query, items)
            }
            Err(e) => {
                tracing::warn!(error = %e, keyword = %query.keyword, page = query.page, "Error querying upstream search API; serving mock data");
                SearchResult::fallback(query, FALLBACK_ERROR, mock_items())
            }
        }
    }

    async fn fetch_items(&self, query: &SearchQuery) -> Result<Vec<Item>, UpstreamError> {
        let payload = ware_search(&self.client, query).await?;
        map_items(&payload)
    }
}
