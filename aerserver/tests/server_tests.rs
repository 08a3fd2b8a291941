//! Router assembly and CORS behavior of the server wrapper

use aerserver::{Server, ServerBuilder};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::util::ServiceExt;

#[tokio::test]
async fn add_router_nests_under_the_given_path() {
    let mut server = Server::new("test", "http://localhost", 0);
    let sub = Router::new().route("/ping", get(|| async { "pong" }));
    server.add_router("/api", sub).await;

    let response = server
        .router()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn add_route_serves_json() {
    let mut server = Server::new("test", "http://localhost", 0);
    server
        .add_route("/api/status", || async {
            serde_json::json!({ "status": "online" })
        })
        .await;

    let response = server
        .router()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "online");
}

#[tokio::test]
async fn responses_are_cors_open() {
    let mut server = Server::new("test", "http://localhost", 0);
    server
        .add_router("/api", Router::new().route("/ping", get(|| async { "pong" })))
        .await;

    // Preflight from an arbitrary origin is accepted
    let response = server
        .router()
        .await
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/ping")
                .header(header::ORIGIN, "https://elsewhere.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn builder_carries_identity_into_info() {
    let server = ServerBuilder::new("AerRadio", "http://radio.local", 5000).build();
    let info = server.info();
    assert_eq!(info.name, "AerRadio");
    assert_eq!(info.base_url, "http://radio.local");
    assert_eq!(info.http_port, 5000);
}
