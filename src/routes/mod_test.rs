use axum::body::Body;
use axum::http::{Method, Request, header};
use tower::ServiceExt;

use super::*;

fn config_with_origins(origins: &[&str]) -> ServerConfig {
    ServerConfig { port: 0, cors_origins: origins.iter().map(ToString::to_string).collect() }
}

#[tokio::test]
async fn healthz_is_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = app(AppState::default(), &ServerConfig::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_rejects_get() {
    let request = Request::builder().uri("/generate").body(Body::empty()).unwrap();
    let response = app(AppState::default(), &ServerConfig::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn wildcard_origin_allows_any() {
    let request = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "https://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app(AppState::default(), &config_with_origins(&["*"])).oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn listed_origin_is_echoed_on_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let config = config_with_origins(&["http://localhost:5173", "https://app.example"]);
    let response = app(AppState::default(), &config).oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:5173");
}

#[tokio::test]
async fn unlisted_origin_gets_no_cors_header() {
    let request = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let config = config_with_origins(&["http://localhost:5173"]);
    let response = app(AppState::default(), &config).oneshot(request).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn wildcard_preflight_never_allows_credentials() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate")
        .header(header::ORIGIN, "https://anywhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app(AppState::default(), &ServerConfig::default()).oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}
