//! REST endpoints for user favorites

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::{Favorite, FavoritesStore};

/// Error response body shared by all favorites endpoints
#[derive(Debug, Serialize, ToSchema)]
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

/// Body for `POST /favorites`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub station_id: u32,
    pub user_id: String,
}

/// Response for `DELETE /favorites/{stationId}/{userId}`
#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveFavoriteResponse {
    pub success: bool,
}

/// Response for the favorite check endpoint
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IsFavoriteResponse {
    pub is_favorite: bool,
}

/// Creates the router for the favorites API
pub fn create_router(state: Arc<FavoritesStore>) -> Router {
    Router::new()
        .route("/favorites", post(add_favorite))
        .route("/favorites/{user_id}", get(list_favorites))
        .route("/favorites/{station_id}/{user_id}", delete(remove_favorite))
        .route("/favorites/{station_id}/{user_id}/check", get(check_favorite))
        .with_state(state)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/favorites/{userId}
#[utoipa::path(
    get,
    path = "/api/favorites/{user_id}",
    tag = "favorites",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorites", body = [Favorite])
    )
)]
pub async fn list_favorites(
    State(state): State<Arc<FavoritesStore>>,
    Path(user_id): Path<String>,
) -> Json<Vec<Favorite>> {
    Json(state.list_by_user(&user_id))
}

/// POST /api/favorites
///
/// Adding an already-favorited station returns the existing row (upsert),
/// still with status 201. The payload is validated in the handler so that
/// mistyped fields surface as 400 rather than the extractor's 422.
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = "favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "The favorite row", body = Favorite),
        (status = 400, description = "Malformed payload", body = ErrorResponse)
    )
)]
pub async fn add_favorite(
    State(state): State<Arc<FavoritesStore>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Favorite>), AppError> {
    let request: AddFavoriteRequest = serde_json::from_value(payload)
        .map_err(|e| AppError::Validation(format!("Invalid data: {e}")))?;

    let favorite = state.add(request.station_id, &request.user_id);
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/favorites/{stationId}/{userId}
#[utoipa::path(
    delete,
    path = "/api/favorites/{station_id}/{user_id}",
    tag = "favorites",
    params(
        ("station_id" = u32, Path, description = "Station id"),
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = RemoveFavoriteResponse),
        (status = 404, description = "No such favorite", body = ErrorResponse)
    )
)]
pub async fn remove_favorite(
    State(state): State<Arc<FavoritesStore>>,
    Path((station_id, user_id)): Path<(u32, String)>,
) -> Result<Json<RemoveFavoriteResponse>, AppError> {
    if state.remove(station_id, &user_id) {
        Ok(Json(RemoveFavoriteResponse { success: true }))
    } else {
        Err(AppError::NotFound("Favorite not found".into()))
    }
}

/// GET /api/favorites/{stationId}/{userId}/check
#[utoipa::path(
    get,
    path = "/api/favorites/{station_id}/{user_id}/check",
    tag = "favorites",
    params(
        ("station_id" = u32, Path, description = "Station id"),
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Favorite status", body = IsFavoriteResponse)
    )
)]
pub async fn check_favorite(
    State(state): State<Arc<FavoritesStore>>,
    Path((station_id, user_id)): Path<(u32, String)>,
) -> Json<IsFavoriteResponse> {
    Json(IsFavoriteResponse {
        is_favorite: state.is_favorite(station_id, &user_id),
    })
}
