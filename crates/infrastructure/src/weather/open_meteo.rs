//! Current-conditions client for the Open-Meteo forecast API.
//!
//! Free endpoint, no API key required. Temperatures are requested in
//! Fahrenheit; the full response body is retained as the report's raw
//! payload.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use zipcast_application::ports::WeatherProvider;
use zipcast_domain::config::WeatherConfig;
use zipcast_domain::geocode::validate_coordinates;
use zipcast_domain::{DomainError, WeatherReport};

pub struct OpenMeteoClient {
    http: Client,
    endpoint: String,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, DomainError> {
        validate_coordinates(latitude, longitude)?;

        let url = format!("{}/v1/forecast", self.endpoint);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", "temperature_2m_max,temperature_2m_min".to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::WeatherTimeout
                } else {
                    DomainError::WeatherRequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::WeatherApiStatus(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::WeatherTimeout
            } else {
                DomainError::InvalidWeatherResponse(format!("unparsable body: {e}"))
            }
        })?;

        let report = parse_report(body)?;
        debug!(
            latitude,
            longitude,
            current_temp_f = report.current_temp_f(),
            "Weather fetched"
        );
        Ok(report)
    }
}

fn parse_report(body: Value) -> Result<WeatherReport, DomainError> {
    if !body.is_object() {
        return Err(DomainError::InvalidWeatherResponse(
            "body is not a JSON object".to_string(),
        ));
    }

    let current = body
        .get("current_weather")
        .and_then(|cw| cw.get("temperature"))
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            DomainError::InvalidWeatherResponse(
                "missing current_weather.temperature".to_string(),
            )
        })?;

    let high = daily_first(&body, "temperature_2m_max");
    let low = daily_first(&body, "temperature_2m_min");

    Ok(WeatherReport::new(current, high, low, body))
}

fn daily_first(body: &Value, field: &str) -> Option<f64> {
    body.get("daily")?.get(field)?.get(0)?.as_f64()
}
