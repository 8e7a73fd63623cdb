use serde::{Deserialize, Serialize};

/// Geocoding upstream configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodingConfig {
    /// Nominatim-compatible endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Sent with every request. Nominatim's usage policy requires an
    /// identifying User-Agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

fn default_user_agent() -> String {
    "zipcast/0.1 (+https://github.com/zipcast)".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
