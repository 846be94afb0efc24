use axum::extract::{Query, State};
use axum::Json;

use crate::models::{AppState, SearchParams, SearchQuery, SearchResult};
use super::error::ApiError;

/// `GET /api/search?keyword=&page=`
///
/// Always 200 once the query is valid; `success` tells live data from the
/// mock fallback. Query pairs are taken raw so repeated keys never trip
/// the extractor.
pub async fn search_get(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResult>, ApiError> {
    let query = SearchQuery::try_from(SearchParams::from_pairs(pairs)).map_err(|e| {
        tracing::info!(error = %e, "Rejected search request");
        ApiError::from(e)
    })?;
    Ok(Json(state.proxy.search(query).await))
}
