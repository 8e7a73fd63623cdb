use serde::{Deserialize, Serialize};

/// Weather upstream configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    /// Open-Meteo-compatible endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_endpoint() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
