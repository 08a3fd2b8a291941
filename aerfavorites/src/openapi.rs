//! OpenAPI documentation for the favorites endpoints

use utoipa::OpenApi;

/// OpenAPI document for the favorites API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::list_favorites,
        crate::api::add_favorite,
        crate::api::remove_favorite,
        crate::api::check_favorite,
    ),
    components(
        schemas(
            crate::store::Favorite,
            crate::api::AddFavoriteRequest,
            crate::api::RemoveFavoriteResponse,
            crate::api::IsFavoriteResponse,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "favorites", description = "Per-user station bookmarks")
    ),
    info(
        title = "AerRadio Favorites API",
        version = "0.1.0",
        description = "Add, remove, list and check per-user favorite stations."
    )
)]
pub struct ApiDoc;
