use std::sync::Arc;

use aercatalog::{CatalogStore, LookupService};
use aerfavorites::FavoritesStore;
use aerserver::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ========== Phase 1: stores ==========

    info!("📻 Loading station catalog...");
    let catalog = Arc::new(CatalogStore::builtin()?);
    info!("✅ {} station(s) in the catalog", catalog.all().len());

    let lookup = LookupService::new(catalog);
    let favorites = Arc::new(FavoritesStore::new());

    // ========== Phase 2: HTTP surface ==========

    let mut server = Server::new_configured();

    server
        .add_openapi(
            aercatalog::api::create_router(lookup),
            aercatalog::ApiDoc::openapi(),
            "stations",
        )
        .await;

    server
        .add_openapi(
            aerfavorites::api::create_router(favorites),
            aerfavorites::ApiDoc::openapi(),
            "favorites",
        )
        .await;

    let server_info = server.info();
    server
        .add_route("/api/status", move || {
            let server_info = server_info.clone();
            async move { serde_json::json!({ "status": "online", "server": server_info }) }
        })
        .await;

    server.add_redirect("/docs", "/swagger-ui/stations").await;

    // ========== Phase 3: startup ==========

    info!("🌐 Starting HTTP server...");
    server.start().await;

    info!("✅ AerRadio is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
