//! OpenWeatherMap API data models
//!
//! Only the fields this service reads are modelled; everything else in the
//! provider payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Geographic coordinates as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

/// One weather condition entry (`weather[]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub main: Option<String>,
    pub description: String,
    pub icon: String,
}

/// Main measurements block of a current-weather response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    #[serde(default)]
    pub pressure: Option<f64>,
}

/// Wind block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}

/// System block; `country` is missing for some locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// `GET /weather` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    #[serde(default)]
    pub sys: Option<Sys>,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub coord: Coord,
    #[serde(default)]
    pub dt: Option<i64>,
}

/// Main block of a forecast list element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReadings {
    pub temp: f64,
}

/// One element of the forecast `list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: ForecastReadings,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// `GET /forecast` response (5 day / 3 hour)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
}
