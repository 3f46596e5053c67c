//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod weather;

use crate::config::Settings;
use crate::middleware::{
    cors_layer, method_guard_middleware, origin_guard_middleware, request_logging_middleware,
    require_api_key,
};
use crate::services::{OpenWeatherClient, WeatherTranslator};
use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub client: OpenWeatherClient,
    pub translator: WeatherTranslator,
}

impl AppState {
    /// Build the state from loaded settings
    pub fn new(settings: Settings) -> Result<Self> {
        let client = OpenWeatherClient::new(&settings.openweather)?;

        Ok(Self {
            settings,
            client,
            translator: WeatherTranslator::new(),
        })
    }
}

/// Create application router
pub async fn create_router(settings: Settings) -> Result<Router> {
    let cors = cors_layer(&settings.security)?;
    let app_state = Arc::new(AppState::new(settings)?);

    // The key guard only wraps the weather routes; health stays reachable.
    let weather_routes = Router::new()
        .route("/api/weather", get(weather::current_weather))
        .route("/api/forecast", get(weather::forecast))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_api_key,
        ));

    // Outermost first: tracing, request log, method guard, CORS, origin guard.
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(method_guard_middleware))
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            origin_guard_middleware,
        ));

    let router = Router::new()
        .merge(weather_routes)
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        .layer(middleware_stack);

    Ok(router)
}
