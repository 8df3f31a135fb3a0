//! Photo listing and lookup endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use fokal::FokalError;
use fokal::search::{Listing, QueryParams};

use crate::{
    api::dto::{LimitParams, PhotoDto},
    error::{ServerError, ServerResult, not_found},
    state::AppState,
};

async fn listing(
    state: &AppState,
    listing: Listing,
    pairs: Vec<(String, String)>,
) -> ServerResult<Json<Vec<PhotoDto>>> {
    let photos = state
        .engine
        .listing(listing, &QueryParams::new(pairs))
        .await?;

    Ok(Json(photos.into_iter().map(PhotoDto::from).collect()))
}

/// Most recently uploaded photos
#[utoipa::path(
    get,
    path = "/api/photos/recent",
    tag = "photos",
    params(LimitParams),
    responses(
        (status = 200, description = "Newest first", body = Vec<PhotoDto>),
        (status = 500, description = "Listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn recent_photos(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<Vec<PhotoDto>>> {
    listing(&state, Listing::Recent, pairs).await
}

/// Editor-featured photos
#[utoipa::path(
    get,
    path = "/api/photos/featured",
    tag = "photos",
    params(LimitParams),
    responses(
        (status = 200, description = "Featured photos, newest first", body = Vec<PhotoDto>),
        (status = 500, description = "Listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn featured_photos(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<Vec<PhotoDto>>> {
    listing(&state, Listing::Featured, pairs).await
}

/// Most popular photos
#[utoipa::path(
    get,
    path = "/api/photos/trending",
    tag = "photos",
    params(LimitParams),
    responses(
        (status = 200, description = "Most popular first", body = Vec<PhotoDto>),
        (status = 500, description = "Listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn trending_photos(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<Vec<PhotoDto>>> {
    listing(&state, Listing::Trending, pairs).await
}

/// Get a photo by ID
#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    tag = "photos",
    params(
        ("id" = i64, Path, description = "Photo ID")
    ),
    responses(
        (status = 200, description = "Photo found", body = PhotoDto),
        (status = 404, description = "Photo not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_photo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ServerResult<Json<PhotoDto>> {
    let photo = state.engine.photo(id).await.map_err(|e| match e {
        FokalError::NotFound(id) => not_found("Photo", &id.to_string()),
        other => ServerError::from(other),
    })?;

    Ok(Json(PhotoDto::from(photo)))
}
