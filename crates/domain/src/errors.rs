use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid postal code: {0}")]
    InvalidPostalCode(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Cache {operation} failed: {cause}")]
    CacheStoreFailed {
        operation: &'static str,
        cause: String,
    },

    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),

    #[error("Weather API returned status {0}")]
    WeatherApiStatus(u16),

    #[error("Weather request timed out")]
    WeatherTimeout,

    #[error("Weather request failed: {0}")]
    WeatherRequestFailed(String),

    #[error("Invalid weather response: {0}")]
    InvalidWeatherResponse(String),
}

impl DomainError {
    /// Backing-store failures are the only errors the request path is
    /// allowed to degrade on; everything else is fatal to the request.
    pub fn is_cache_failure(&self) -> bool {
        matches!(self, DomainError::CacheStoreFailed { .. })
    }

    pub fn is_weather_failure(&self) -> bool {
        matches!(
            self,
            DomainError::WeatherApiStatus(_)
                | DomainError::WeatherTimeout
                | DomainError::WeatherRequestFailed(_)
                | DomainError::InvalidWeatherResponse(_)
        )
    }
}
