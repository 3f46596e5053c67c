//! Response translator unit tests

use weatherproxy::models::openweather::{CurrentWeatherResponse, ForecastResponse};
use weatherproxy::services::WeatherTranslator;
use weatherproxy::UpstreamError;

fn parse_current(json: &str) -> CurrentWeatherResponse {
    serde_json::from_str(json).expect("valid current weather payload")
}

fn parse_forecast(json: &str) -> ForecastResponse {
    serde_json::from_str(json).expect("valid forecast payload")
}

#[test]
fn test_current_weather_field_mapping() {
    let upstream = parse_current(r#"{
        "coord": {"lon": 139.6917, "lat": 35.6895},
        "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02n"}],
        "main": {"temp": 22.3, "feels_like": 22.6, "pressure": 1015, "humidity": 78},
        "wind": {"speed": 3.1, "deg": 160},
        "sys": {"country": "JP"},
        "name": "Tokyo"
    }"#);

    let result = WeatherTranslator::new().convert_current(upstream).unwrap();

    assert_eq!(result.city, "Tokyo");
    assert_eq!(result.country.as_deref(), Some("JP"));
    assert_eq!(result.temp, 22.3);
    assert_eq!(result.feels_like, 22.6);
    assert_eq!(result.humidity, 78);
    assert_eq!(result.wind, 3.1);
    assert_eq!(result.description, "few clouds");
    assert_eq!(result.icon, "02n");
    assert_eq!(result.coord.lat, 35.6895);
    assert_eq!(result.coord.lon, 139.6917);
}

#[test]
fn test_current_weather_serialized_shape() {
    let upstream = parse_current(r#"{
        "coord": {"lon": 0.0, "lat": 0.0},
        "weather": [{"description": "clear sky", "icon": "01d"}],
        "main": {"temp": 30.0, "feels_like": 33.0, "humidity": 40},
        "wind": {"speed": 0.5},
        "name": "Null Island"
    }"#);

    let result = WeatherTranslator::new().convert_current(upstream).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["city", "coord", "description", "feels_like", "humidity", "icon", "temp", "wind"]
    );
}

#[test]
fn test_forecast_mapping_keeps_order() {
    let upstream = parse_forecast(r#"{
        "cod": "200",
        "list": [
            {"dt": 300, "main": {"temp": 3.0}, "weather": [{"description": "c", "icon": "03d"}]},
            {"dt": 100, "main": {"temp": 1.0}, "weather": [{"description": "a", "icon": "01d"}]},
            {"dt": 200, "main": {"temp": 2.0}, "weather": [{"description": "b", "icon": "02d"}]}
        ]
    }"#);

    let entries = WeatherTranslator::new().convert_forecast(upstream).unwrap();

    let stamps: Vec<i64> = entries.iter().map(|e| e.dt).collect();
    assert_eq!(stamps, vec![300, 100, 200]);
    assert_eq!(entries[1].description, "a");
    assert_eq!(entries[2].icon, "02d");
    assert_eq!(entries[0].temp, 3.0);
}

#[test]
fn test_forecast_entry_without_conditions_fails() {
    let upstream = parse_forecast(r#"{
        "list": [
            {"dt": 100, "main": {"temp": 1.0}, "weather": [{"description": "a", "icon": "01d"}]},
            {"dt": 200, "main": {"temp": 2.0}, "weather": []}
        ]
    }"#);

    let err = WeatherTranslator::new().convert_forecast(upstream).unwrap_err();
    assert!(matches!(err, UpstreamError::Malformed(ref msg) if msg.contains("200")));
}

#[test]
fn test_missing_required_fields_fail_to_parse() {
    let result = serde_json::from_str::<CurrentWeatherResponse>(r#"{"name": "London"}"#);
    assert!(result.is_err());

    let result = serde_json::from_str::<ForecastResponse>(r#"{"cod": "200"}"#);
    assert!(result.is_err());
}
