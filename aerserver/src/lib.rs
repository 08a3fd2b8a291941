//! # aerserver - High-level axum server for AerRadio
//!
//! Small abstraction over axum used by the AerRadio binary:
//!
//! - register per-domain sub-routers with `add_router`
//! - mount OpenAPI-documented APIs with Swagger UI via `add_openapi`
//! - CORS-open responses (`CorsLayer::permissive`)
//! - graceful shutdown on Ctrl+C
//!
//! ## Example
//!
//! ```rust,no_run
//! use aerserver::ServerBuilder;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut server = ServerBuilder::new("AerRadio", "http://localhost", 5000).build();
//!
//!     server.add_route("/api/status", || async {
//!         serde_json::json!({ "status": "online" })
//!     }).await;
//!
//!     server.start().await;
//!     server.wait().await;
//! }
//! ```

pub mod server;

pub use server::{Server, ServerBuilder, ServerInfo};
