//! REST endpoints for the station catalog
//!
//! The handlers expose the lookup primitives over HTTP. Station JSON uses
//! camelCase field names and an empty result array is a normal 200, never
//! an error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::lookup::LookupService;
use crate::models::Station;

// ============ Error handling ============

/// Error response body shared by all catalog endpoints
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Creates the router for the stations API
pub fn create_router(state: LookupService) -> Router {
    Router::new()
        .route("/stations", get(list_stations))
        .route("/stations/{id}", get(get_station))
        .route("/stations/slug/{slug}", get(get_station_by_slug))
        .route("/stations/search/{query}", get(search_stations))
        .route("/stations/genre/{genre}", get(stations_by_genre))
        .with_state(state)
}

/// Optional filters for `GET /stations`
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StationsQuery {
    /// Substring search over name/description/genre/location
    pub search: Option<String>,
    /// Exact genre match; `all` disables the filter
    pub genre: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/stations
///
/// Lists active stations. When both `search` and `genre` are supplied they
/// are combined conjunctively: a station must satisfy the genre filter AND
/// the text search.
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = "stations",
    params(StationsQuery),
    responses(
        (status = 200, description = "Active stations matching the filters", body = [Station])
    )
)]
pub async fn list_stations(
    State(state): State<LookupService>,
    Query(filters): Query<StationsQuery>,
) -> Json<Vec<Station>> {
    let mut stations = match filters.genre.as_deref() {
        Some(genre) => state.by_genre(genre),
        None => state.list_active(),
    };

    if let Some(search) = filters.search.as_deref() {
        let needle = search.to_lowercase();
        stations.retain(|s| s.matches_query(&needle));
    }

    debug!(count = stations.len(), "Listed stations");
    Json(stations)
}

/// GET /api/stations/{id}
///
/// Direct lookup by id; inactive stations are addressable here.
#[utoipa::path(
    get,
    path = "/api/stations/{id}",
    tag = "stations",
    params(("id" = u32, Path, description = "Station id")),
    responses(
        (status = 200, description = "The station", body = Station),
        (status = 400, description = "Non-numeric id", body = ErrorResponse),
        (status = 404, description = "Unknown station", body = ErrorResponse)
    )
)]
pub async fn get_station(
    State(state): State<LookupService>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    let id: u32 = id
        .parse()
        .map_err(|_| AppError::Validation("Invalid station ID".into()))?;

    state
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Station not found".into()))
}

/// GET /api/stations/slug/{slug}
///
/// Direct lookup by slug; inactive stations are addressable here.
#[utoipa::path(
    get,
    path = "/api/stations/slug/{slug}",
    tag = "stations",
    params(("slug" = String, Path, description = "Station slug")),
    responses(
        (status = 200, description = "The station", body = Station),
        (status = 404, description = "Unknown station", body = ErrorResponse)
    )
)]
pub async fn get_station_by_slug(
    State(state): State<LookupService>,
    Path(slug): Path<String>,
) -> Result<Json<Station>, AppError> {
    state
        .get_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Station not found".into()))
}

/// GET /api/stations/search/{query}
#[utoipa::path(
    get,
    path = "/api/stations/search/{query}",
    tag = "stations",
    params(("query" = String, Path, description = "Search text")),
    responses(
        (status = 200, description = "Matching active stations", body = [Station]),
        (status = 400, description = "Blank query", body = ErrorResponse)
    )
)]
pub async fn search_stations(
    State(state): State<LookupService>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Station>>, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation("Search query is required".into()));
    }
    Ok(Json(state.search(&query)))
}

/// GET /api/stations/genre/{genre}
#[utoipa::path(
    get,
    path = "/api/stations/genre/{genre}",
    tag = "stations",
    params(("genre" = String, Path, description = "Genre name, or `all`")),
    responses(
        (status = 200, description = "Active stations of the genre", body = [Station])
    )
)]
pub async fn stations_by_genre(
    State(state): State<LookupService>,
    Path(genre): Path<String>,
) -> Json<Vec<Station>> {
    Json(state.by_genre(&genre))
}
