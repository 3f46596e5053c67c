//! Data models module
//!
//! Defines the OpenWeatherMap payloads and the simplified structures served to clients

pub mod openweather;
pub mod weather;

pub use weather::{CurrentWeatherResult, ForecastEntry, LocationParams, WeatherQuery};
