//! Health check handlers
//!
//! Provides application health status check endpoints

use crate::handlers::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Service name reported by the health endpoints
pub const SERVICE_NAME: &str = "weatherproxy";

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Whether the provider API key is configured
    pub api_key: String,
    /// Upstream base URL
    pub upstream: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Start the uptime clock
pub fn mark_started() {
    Lazy::force(&START_TIME);
}

/// Basic health check
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    Json(build_response("healthy", &state))
}

/// Readiness check
///
/// GET /health/ready
/// The service cannot answer weather queries without an API key.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, StatusCode> {
    debug!("Executing readiness check");

    if !state.settings.has_api_key() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(build_response("ready", &state)))
}

/// Liveness check
///
/// GET /health/live
pub async fn liveness_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing liveness check");

    Json(build_response("alive", &state))
}

fn build_response(status: &str, state: &AppState) -> HealthResponse {
    let api_key = if state.settings.has_api_key() {
        "configured"
    } else {
        "missing"
    };

    HealthResponse {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            api_key: api_key.to_string(),
            upstream: state.settings.openweather.base_url.clone(),
            uptime_seconds: get_uptime_seconds(),
        }),
    }
}

/// Get service uptime in seconds
fn get_uptime_seconds() -> u64 {
    START_TIME.elapsed().as_secs()
}
