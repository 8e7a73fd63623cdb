use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Weather conditions for one location at fetch time.
///
/// The current temperature is required at construction; a payload without
/// one never becomes a report. High/low are today's forecast extremes when
/// the upstream supplied them. The full upstream body is kept in `raw` for
/// anything downstream formatting does not cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    current_temp_f: f64,
    high_temp_f: Option<f64>,
    low_temp_f: Option<f64>,
    raw: Value,
}

impl WeatherReport {
    pub fn new(
        current_temp_f: f64,
        high_temp_f: Option<f64>,
        low_temp_f: Option<f64>,
        raw: Value,
    ) -> Self {
        Self {
            current_temp_f,
            high_temp_f,
            low_temp_f,
            raw,
        }
    }

    pub fn current_temp_f(&self) -> f64 {
        self.current_temp_f
    }

    pub fn high_temp_f(&self) -> Option<f64> {
        self.high_temp_f
    }

    pub fn low_temp_f(&self) -> Option<f64> {
        self.low_temp_f
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
