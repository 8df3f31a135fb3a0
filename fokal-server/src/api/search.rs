//! Multi-signal search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};

use fokal::search::QueryParams;

use crate::{
    api::dto::{SearchHitDto, SearchParams},
    error::ServerResult,
    state::AppState,
};

/// Search photos by text, dominant colour and location
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Ranked and hydrated hits, best first", body = Vec<SearchHitDto>),
        (status = 400, description = "Malformed colour or coordinate parameter", body = crate::error::ErrorResponse),
        (status = 500, description = "A signal or hydration failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_photos(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<Vec<SearchHitDto>>> {
    let params = QueryParams::new(pairs);
    let hits = state.engine.search(&params).await?;

    Ok(Json(hits.into_iter().map(SearchHitDto::from).collect()))
}
