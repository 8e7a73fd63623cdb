use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use zipcast_domain::WeatherReport;

/// Failure reported by a backing store implementation.
///
/// Adapters reduce their native error types to this one so the forecast
/// cache can wrap them uniformly without knowing which store is configured.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }
}

/// TTL-bounded key/value store holding weather reports.
///
/// Any conforming implementation (in-memory map, distributed cache) can back
/// the forecast cache. Entry expiry is the store's job; the cache never
/// scans for stale entries. Every call is an independent atomic operation
/// and implementations must be safe for concurrent use.
#[async_trait]
pub trait ForecastStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<WeatherReport>, StoreError>;

    async fn write(
        &self,
        key: &str,
        report: &WeatherReport,
        ttl: Duration,
    ) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    async fn exists(&self, key: &str) -> Result<bool, StoreError>;
}
