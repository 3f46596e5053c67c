//! Weather proxy handlers
//!
//! Validates the location, calls OpenWeatherMap and reshapes the answer.
//! Every upstream failure is funnelled through the error mapper via `?`.
//! Query strings axum cannot decode are answered as JSON validation errors.

use crate::handlers::AppState;
use crate::models::{CurrentWeatherResult, ForecastEntry, LocationParams, WeatherQuery};
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

/// Current weather
///
/// GET /api/weather?city=...  or  GET /api/weather?lat=...&lon=...
pub async fn current_weather(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LocationParams>, QueryRejection>,
) -> AppResult<Json<CurrentWeatherResult>> {
    let Query(params) = query?;
    let query = WeatherQuery::from_params(&params)?;
    let api_key = state.settings.api_key().ok_or(AppError::Configuration)?;
    debug!("Current weather request for {:?}", query);

    let response = state.client.current_weather(&query, api_key).await?;
    let result = state.translator.convert_current(response)?;

    Ok(Json(result))
}

/// Forecast
///
/// GET /api/forecast?city=...  or  GET /api/forecast?lat=...&lon=...
pub async fn forecast(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LocationParams>, QueryRejection>,
) -> AppResult<Json<Vec<ForecastEntry>>> {
    let Query(params) = query?;
    let query = WeatherQuery::from_params(&params)?;
    let api_key = state.settings.api_key().ok_or(AppError::Configuration)?;
    debug!("Forecast request for {:?}", query);

    let response = state.client.forecast(&query, api_key).await?;
    let entries = state.translator.convert_forecast(response)?;

    Ok(Json(entries))
}
