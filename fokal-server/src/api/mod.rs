//! API implementation for the Fokal HTTP server

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};
use fokal::search::SignalKind;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

pub mod dto;
pub mod photos;
pub mod search;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        search::search_photos,
        photos::recent_photos,
        photos::featured_photos,
        photos::trending_photos,
        photos::get_photo,
        health_check,
    ),
    components(
        schemas(
            dto::PhotoDto,
            dto::ColorDto,
            dto::LocationDto,
            dto::SearchHitDto,
            dto::HealthDto,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "search", description = "Multi-signal photo search"),
        (name = "photos", description = "Photo listings and lookup"),
        (name = "health", description = "Service health"),
    ),
    info(
        title = "Fokal Photo Search API",
        version = "1.0.0",
        description = "Photo search that fuses full-text, dominant-colour and geographic signals into one ranking.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api", description = "API base path")
    )
)]
pub struct ApiDoc;

/// Create the main router with all API endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        // Search endpoint
        .route("/search", get(search::search_photos))
        // Photo endpoints
        .route("/photos/recent", get(photos::recent_photos))
        .route("/photos/featured", get(photos::featured_photos))
        .route("/photos/trending", get(photos::trending_photos))
        .route("/photos/{id}", get(photos::get_photo))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state);

    // Main router with API prefix and documentation
    let swagger_router = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new().nest("/api", api_router).merge(swagger_router)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health and served signals", body = dto::HealthDto)
    )
)]
async fn health_check(State(state): State<Arc<AppState>>) -> Json<dto::HealthDto> {
    let search = state.engine.config();

    Json(dto::HealthDto {
        status: "OK".to_string(),
        version: fokal::VERSION.to_string(),
        signals: SignalKind::ALL.iter().map(|s| s.to_string()).collect(),
        default_limit: search.default_limit,
        max_limit: search.max_limit,
    })
}
