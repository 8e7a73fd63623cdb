use async_trait::async_trait;
use zipcast_domain::{DomainError, WeatherReport};

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for the given coordinates.
    ///
    /// Implementations validate coordinate ranges before any network I/O.
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, DomainError>;
}
