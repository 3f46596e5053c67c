//! API key guard middleware
//!
//! Refuses weather requests while no provider API key is configured

use crate::handlers::AppState;
use crate::utils::error::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, error};

/// API key guard
///
/// Checked on every request so the caller gets a clear 500 instead of an
/// opaque upstream 401.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.settings.has_api_key() {
        error!("❌ Missing OpenWeatherMap API key");
        return AppError::Configuration.into_response();
    }

    debug!("API key present, forwarding request");
    next.run(request).await
}
