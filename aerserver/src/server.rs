//! High-level server API for axum
//!
//! Thin wrapper hiding router assembly and lifecycle management from the
//! application: sub-routers are registered per domain, OpenAPI documents
//! get a Swagger UI mount, every response is CORS-open and the server
//! shuts down gracefully on Ctrl+C.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::{signal, sync::RwLock, task::JoinHandle};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

/// Serializable server info
#[derive(Clone, Serialize, utoipa::ToSchema)]
pub struct ServerInfo {
    pub name: String,
    pub base_url: String,
    pub http_port: u16,
}

/// Main HTTP server
pub struct Server {
    name: String,
    base_url: String,
    http_port: u16,
    router: Arc<RwLock<Router>>,
    join_handle: Option<JoinHandle<()>>,
}

impl Server {
    /// Creates a new server instance
    ///
    /// # Arguments
    ///
    /// * `name` - Server name (for logs)
    /// * `base_url` - Base URL (e.g., "http://localhost")
    /// * `http_port` - HTTP port to listen on
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            http_port,
            router: Arc::new(RwLock::new(Router::new())),
            join_handle: None,
        }
    }

    /// Creates a server from the global configuration
    pub fn new_configured() -> Self {
        let config = aerconfig::get_config();
        Self::new(
            config.get_server_name(),
            config.get_base_url(),
            config.get_http_port(),
        )
    }

    /// Adds a JSON route
    ///
    /// The closure is called on every GET request to `path` and its return
    /// value serialized as the response body.
    pub async fn add_route<F, Fut, T>(&mut self, path: &str, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Serialize + Send + 'static,
    {
        let f = Arc::new(f);
        let handler = {
            let f = f.clone();
            move || {
                let f = f.clone();
                async move { Json(f().await) }
            }
        };

        let route = Router::new().route("/", get(handler));

        let mut r = self.router.write().await;
        *r = if path == "/" {
            std::mem::take(&mut *r).merge(route)
        } else {
            std::mem::take(&mut *r).nest(path, route)
        };
    }

    /// Adds a permanent HTTP redirect
    pub async fn add_redirect(&mut self, from: &str, to: &str) {
        let target = to.to_string();
        let route = Router::new().route(
            "/",
            get(move || async move { Redirect::permanent(&target) }),
        );

        let mut r = self.router.write().await;
        *r = if from == "/" {
            std::mem::take(&mut *r).merge(route)
        } else {
            std::mem::take(&mut *r).nest(from, route)
        };
    }

    /// Adds a sub-router
    ///
    /// Merged directly when `path` is "/", nested under `path` otherwise.
    pub async fn add_router(&mut self, path: &str, sub_router: Router) {
        let mut r = self.router.write().await;
        *r = if path == "/" {
            std::mem::take(&mut *r).merge(sub_router)
        } else {
            let normalized = format!("/{}", path.trim_start_matches('/'));
            std::mem::take(&mut *r).nest(&normalized, sub_router)
        };
    }

    /// Adds an API router together with its OpenAPI documentation
    ///
    /// The router is nested under `/api`; the Swagger UI for it is served
    /// at `/swagger-ui/{name}` backed by `/api-docs/{name}.json`.
    pub async fn add_openapi(
        &mut self,
        api_router: Router,
        openapi: utoipa::openapi::OpenApi,
        name: &str,
    ) {
        let swagger_path: &'static str =
            Box::leak(format!("/swagger-ui/{name}").into_boxed_str());
        let openapi_json_path: &'static str =
            Box::leak(format!("/api-docs/{name}.json").into_boxed_str());

        let swagger = SwaggerUi::new(swagger_path).url(openapi_json_path, openapi);
        let nested = Router::new().nest("/api", api_router);

        let mut r = self.router.write().await;
        *r = std::mem::take(&mut *r).merge(nested).merge(swagger);
    }

    /// Snapshot of the assembled router, CORS layer applied
    ///
    /// Used by `start()` and directly by tests to drive the router
    /// in-process.
    pub async fn router(&self) -> Router {
        self.router.read().await.clone().layer(CorsLayer::permissive())
    }

    /// Starts the HTTP server
    ///
    /// Listens on the configured port and installs a Ctrl+C handler for a
    /// graceful shutdown.
    pub async fn start(&mut self) {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.http_port));
        info!(
            "Server {} running at {}:{}",
            self.name, self.base_url, self.http_port
        );

        let router = self.router().await;
        let server_task = tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, router.into_make_service())
                .await
                .unwrap();
        });

        let shutdown_task = tokio::spawn(async move {
            signal::ctrl_c().await.expect("failed to listen for ctrl_c");
            info!("Ctrl+C received, shutting down");
        });

        self.join_handle = Some(tokio::spawn(async move {
            tokio::select! {
                _ = server_task => {},
                _ = shutdown_task => {},
            }
        }));
    }

    /// Waits for the server to finish
    pub async fn wait(&mut self) {
        if let Some(h) = self.join_handle.take() {
            let _ = h.await;
        }
    }

    /// Returns the server info
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            name: self.name.clone(),
            base_url: self.base_url.clone(),
            http_port: self.http_port,
        }
    }
}

/// Builder pattern for [`Server`]
pub struct ServerBuilder {
    name: String,
    base_url: String,
    http_port: u16,
}

impl ServerBuilder {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            http_port,
        }
    }

    pub fn new_configured() -> Self {
        let config = aerconfig::get_config();
        Self {
            name: config.get_server_name(),
            base_url: config.get_base_url(),
            http_port: config.get_http_port(),
        }
    }

    /// Consumes the builder and returns a ready-to-use [`Server`]
    pub fn build(self) -> Server {
        Server::new(self.name, self.base_url, self.http_port)
    }
}
