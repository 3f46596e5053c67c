//! Response translation service
//!
//! Reshapes OpenWeatherMap payloads into the simplified client contract

use crate::models::openweather::{CurrentWeatherResponse, ForecastItem, ForecastResponse};
use crate::models::{CurrentWeatherResult, ForecastEntry};
use crate::utils::error::UpstreamError;
use tracing::debug;

/// Stateless translator between the provider schema and the client schema
#[derive(Debug, Clone, Default)]
pub struct WeatherTranslator;

impl WeatherTranslator {
    /// Create a new translator
    pub fn new() -> Self {
        Self
    }

    /// Convert a current-weather payload
    ///
    /// Fails when the payload carries no weather condition.
    pub fn convert_current(
        &self,
        response: CurrentWeatherResponse,
    ) -> Result<CurrentWeatherResult, UpstreamError> {
        let condition = response.weather.into_iter().next().ok_or_else(|| {
            UpstreamError::Malformed("current weather has no conditions".to_string())
        })?;

        Ok(CurrentWeatherResult {
            city: response.name,
            country: response.sys.and_then(|sys| sys.country),
            temp: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            wind: response.wind.speed,
            description: condition.description,
            icon: condition.icon,
            coord: response.coord,
        })
    }

    /// Convert a forecast payload, keeping upstream order
    pub fn convert_forecast(
        &self,
        response: ForecastResponse,
    ) -> Result<Vec<ForecastEntry>, UpstreamError> {
        let entries = response
            .list
            .into_iter()
            .map(convert_forecast_item)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Converted {} forecast entries", entries.len());
        Ok(entries)
    }
}

fn convert_forecast_item(item: ForecastItem) -> Result<ForecastEntry, UpstreamError> {
    let condition = item.weather.into_iter().next().ok_or_else(|| {
        UpstreamError::Malformed(format!("forecast entry {} has no conditions", item.dt))
    })?;

    Ok(ForecastEntry {
        dt: item.dt,
        temp: item.main.temp,
        icon: condition.icon,
        description: condition.description,
    })
}
