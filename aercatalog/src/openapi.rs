//! OpenAPI documentation for the stations endpoints

use utoipa::OpenApi;

/// OpenAPI document for the stations API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::list_stations,
        crate::api::get_station,
        crate::api::get_station_by_slug,
        crate::api::search_stations,
        crate::api::stations_by_genre,
    ),
    components(
        schemas(
            crate::models::Station,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "stations", description = "Radio station directory and lookup")
    ),
    info(
        title = "AerRadio Stations API",
        version = "0.1.0",
        description = "Browse, search and filter the fixed radio station catalog."
    )
)]
pub struct ApiDoc;
