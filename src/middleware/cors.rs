//! Cross-origin policy
//!
//! Only GET requests from one configured browser origin are permitted

use crate::config::SecurityConfig;
use crate::handlers::AppState;
use crate::utils::error::AppError;
use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Build the CORS layer for the configured origin
///
/// Preflight requests are answered here; only `GET` is advertised.
pub fn cors_layer(security: &SecurityConfig) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&security.allowed_origin)
        .with_context(|| format!("Invalid allowed origin: {}", security.allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]))
}

/// Origin guard middleware
///
/// Browsers always send `Origin` on cross-origin calls, so a mismatching header
/// is rejected outright. Requests without the header pass.
pub async fn origin_guard_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request_origin(&headers) {
        if !is_allowed_origin(origin, &state.settings.security.allowed_origin) {
            warn!("Rejected request from origin: {}", origin);
            return AppError::OriginNotAllowed(origin.to_string()).into_response();
        }
    }

    next.run(request).await
}

/// Method guard middleware
///
/// Only `GET` reaches the routes. axum would otherwise serve `HEAD` through
/// the `GET` handler. A genuine preflight (`OPTIONS` carrying
/// `Access-Control-Request-Method`) is left to the CORS layer.
pub async fn method_guard_middleware(request: Request, next: Next) -> Response {
    let method = request.method();
    if !is_allowed_method(method, request.headers()) {
        warn!("Rejected {} request to {}", method, request.uri().path());
        return AppError::MethodNotAllowed(method.to_string()).into_response();
    }

    next.run(request).await
}

/// Whether a request method passes the cross-origin policy
pub fn is_allowed_method(method: &Method, headers: &HeaderMap) -> bool {
    *method == Method::GET
        || (*method == Method::OPTIONS
            && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD))
}

/// Extract the `Origin` header value
pub fn request_origin(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::ORIGIN).and_then(|v| v.to_str().ok())
}

/// Compare an origin against the allowed one
///
/// Exact, byte-for-byte, the same rule the CORS layer applies.
pub fn is_allowed_origin(origin: &str, allowed: &str) -> bool {
    origin == allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed_origin() {
        assert!(is_allowed_origin("http://localhost:3000", "http://localhost:3000"));
        assert!(!is_allowed_origin("http://localhost:3000/", "http://localhost:3000"));
        assert!(!is_allowed_origin("http://localhost:3001", "http://localhost:3000"));
        assert!(!is_allowed_origin("https://localhost:3000", "http://localhost:3000"));
    }

    #[test]
    fn test_is_allowed_method() {
        let mut headers = HeaderMap::new();
        assert!(is_allowed_method(&Method::GET, &headers));
        assert!(!is_allowed_method(&Method::HEAD, &headers));
        assert!(!is_allowed_method(&Method::POST, &headers));
        assert!(!is_allowed_method(&Method::OPTIONS, &headers));

        headers.insert(header::ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("GET"));
        assert!(is_allowed_method(&Method::OPTIONS, &headers));
    }

    #[test]
    fn test_cors_layer_rejects_bad_origin_value() {
        let security = SecurityConfig {
            allowed_origin: "http://bad\norigin".to_string(),
        };
        assert!(cors_layer(&security).is_err());
    }
}
