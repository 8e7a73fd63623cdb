use serde::Serialize;
use zipcast_application::use_cases::Forecast;

/// Rendered forecast returned to the browser.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub postal_code: String,
    pub current_temp: String,
    pub high_temp: String,
    pub low_temp: String,
    pub cached: bool,
    pub source: &'static str,
}

impl From<&Forecast> for ForecastResponse {
    fn from(forecast: &Forecast) -> Self {
        Self {
            postal_code: forecast.postal_code.clone(),
            current_temp: format_temp_f(Some(forecast.report.current_temp_f())),
            high_temp: format_temp_f(forecast.report.high_temp_f()),
            low_temp: format_temp_f(forecast.report.low_temp_f()),
            cached: forecast.cache_hit,
            source: if forecast.cache_hit { "cache" } else { "live" },
        }
    }
}

/// Display formatting for Fahrenheit temperatures; absent values render as
/// "N/A".
pub fn format_temp_f(temp: Option<f64>) -> String {
    match temp {
        Some(t) => format!("{}°F", t.round() as i64),
        None => "N/A".to_string(),
    }
}
