//! Middleware module unit tests

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use weatherproxy::config::{SecurityConfig, Settings};
use weatherproxy::handlers::AppState;
use weatherproxy::middleware::cors::{cors_layer, is_allowed_origin, request_origin};
use weatherproxy::middleware::{method_guard_middleware, origin_guard_middleware, require_api_key};

fn create_test_state(api_key: Option<&str>) -> Arc<AppState> {
    let mut settings = Settings::default();
    settings.openweather.api_key = api_key.map(str::to_string);
    Arc::new(AppState::new(settings).unwrap())
}

/// A router whose only handler is a marker, wrapped by one middleware
fn guarded_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/guarded", get(|| async { "reached" }))
        .route_layer(axum::middleware::from_fn_with_state(state, require_api_key))
}

fn origin_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/guarded", get(|| async { "reached" }))
        .layer(axum::middleware::from_fn_with_state(state, origin_guard_middleware))
}

fn method_router() -> Router {
    Router::new()
        .route("/guarded", get(|| async { "reached" }))
        .layer(axum::middleware::from_fn(method_guard_middleware))
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_api_key_guard_short_circuits() {
    let app = guarded_router(create_test_state(None));
    let request = Request::builder().uri("/guarded").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, r#"{"error":"Server configuration error"}"#);
}

#[tokio::test]
async fn test_api_key_guard_passes_through() {
    let app = guarded_router(create_test_state(Some("configured-key")));
    let request = Request::builder().uri("/guarded").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "reached");
}

#[tokio::test]
async fn test_origin_guard() {
    let state = create_test_state(Some("configured-key"));

    let cases = [
        (None, StatusCode::OK),
        (Some("http://localhost:3000"), StatusCode::OK),
        (Some("http://localhost:3001"), StatusCode::FORBIDDEN),
        (Some("http://localhost:3000/"), StatusCode::FORBIDDEN),
        (Some("null"), StatusCode::FORBIDDEN),
    ];

    for (origin, expected) in cases {
        let mut builder = Request::builder().uri("/guarded");
        if let Some(origin) = origin {
            builder = builder.header("origin", origin);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = origin_router(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), expected, "origin: {:?}", origin);
    }
}

#[tokio::test]
async fn test_method_guard_blocks_head() {
    // Without the guard axum answers HEAD through the GET handler.
    let request = Request::builder()
        .method("HEAD")
        .uri("/guarded")
        .body(Body::empty())
        .unwrap();

    let response = method_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_string(response).await, r#"{"error":"Method not allowed"}"#);
}

#[tokio::test]
async fn test_method_guard_passes_get() {
    let request = Request::builder().uri("/guarded").body(Body::empty()).unwrap();

    let response = method_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "reached");
}

#[test]
fn test_request_origin() {
    let mut headers = HeaderMap::new();
    assert_eq!(request_origin(&headers), None);

    headers.insert("origin", "http://localhost:3000".parse().unwrap());
    assert_eq!(request_origin(&headers), Some("http://localhost:3000"));
}

#[test]
fn test_origin_comparison_is_exact() {
    assert!(is_allowed_origin("https://app.example.com", "https://app.example.com"));
    assert!(!is_allowed_origin("https://app.example.com.evil.net", "https://app.example.com"));
    assert!(!is_allowed_origin("https://sub.app.example.com", "https://app.example.com"));
    assert!(!is_allowed_origin("https://app.example.com/", "https://app.example.com"));
}

#[test]
fn test_cors_layer_builds_for_valid_origin() {
    let security = SecurityConfig {
        allowed_origin: "https://weather.example.com".to_string(),
    };
    assert!(cors_layer(&security).is_ok());
}
