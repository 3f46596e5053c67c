//! Weather proxy data models
//!
//! Inbound query parameters and the simplified response contract served to the frontend

use crate::models::openweather::Coord;
use crate::utils::error::{AppError, AppResult, MISSING_LOCATION};
use serde::{Deserialize, Serialize};

/// Raw location query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationParams {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
}

/// A validated location: a city name or a coordinate pair
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

impl WeatherQuery {
    /// Build a query from raw parameters
    ///
    /// A non-empty `city` takes precedence over coordinates. Coordinates need both
    /// `lat` and `lon`, parseable and within range.
    pub fn from_params(params: &LocationParams) -> AppResult<Self> {
        if let Some(city) = non_empty(&params.city) {
            return Ok(WeatherQuery::City(city.to_string()));
        }

        match (non_empty(&params.lat), non_empty(&params.lon)) {
            (Some(lat), Some(lon)) => {
                let lat = parse_coordinate(lat, 90.0)?;
                let lon = parse_coordinate(lon, 180.0)?;
                Ok(WeatherQuery::Coordinates { lat, lon })
            }
            _ => Err(AppError::Validation(MISSING_LOCATION.to_string())),
        }
    }

    /// Query parameters identifying this location upstream
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        match self {
            WeatherQuery::City(city) => vec![("q", city.clone())],
            WeatherQuery::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_coordinate(raw: &str, limit: f64) -> AppResult<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() <= limit => Ok(value),
        _ => Err(AppError::Validation("Invalid coordinates".to_string())),
    }
}

/// Current conditions served by `GET /api/weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResult {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind: f64,
    pub description: String,
    pub icon: String,
    pub coord: Coord,
}

/// One forecast slot served by `GET /api/forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub temp: f64,
    pub icon: String,
    pub description: String,
}
