//! HTTP client service
//!
//! Encapsulates HTTP communication with the OpenWeatherMap API

use crate::config::OpenWeatherConfig;
use crate::models::openweather::{CurrentWeatherResponse, ForecastResponse};
use crate::models::WeatherQuery;
use crate::utils::error::UpstreamError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// OpenWeatherMap API client
///
/// Every request carries `units=metric` and is bounded by the configured timeout.
/// No retries are attempted.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
}

impl OpenWeatherClient {
    /// Create a new client instance
    pub fn new(config: &OpenWeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("weatherproxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions for a location
    pub async fn current_weather(
        &self,
        query: &WeatherQuery,
        api_key: &str,
    ) -> Result<CurrentWeatherResponse, UpstreamError> {
        self.get_json("weather", query, api_key).await
    }

    /// Fetch the 5 day / 3 hour forecast for a location
    pub async fn forecast(
        &self,
        query: &WeatherQuery,
        api_key: &str,
    ) -> Result<ForecastResponse, UpstreamError> {
        self.get_json("forecast", query, api_key).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &WeatherQuery,
        api_key: &str,
    ) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Sending OpenWeatherMap request: {} {:?}", url, query);

        let mut params = query.upstream_params();
        params.push(("appid", api_key.to_string()));
        params.push(("units", "metric".to_string()));

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = serde_json::from_str(&body)?;
        debug!("OpenWeatherMap {} request completed successfully", endpoint);
        Ok(parsed)
    }
}
