//! Service layer module
//!
//! Contains the OpenWeatherMap HTTP client and the response translator

pub mod client;
pub mod translator;

pub use client::OpenWeatherClient;
pub use translator::WeatherTranslator;
