use crate::ports::{ForecastStore, StoreError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use zipcast_domain::{DomainError, PostalCode, WeatherReport};

/// Entry lifetime used when the configuration does not supply one.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// TTL-bounded forecast cache keyed by normalized postal code.
///
/// Wraps a pluggable [`ForecastStore`]. Every public operation normalizes
/// and validates its key first, and every store failure is wrapped into
/// [`DomainError::CacheStoreFailed`] naming the failed operation. Callers
/// see one error kind regardless of which store is configured, and decide
/// their own degrade policy.
pub struct ForecastCache {
    store: Arc<dyn ForecastStore>,
    ttl: Duration,
}

impl ForecastCache {
    pub fn new(store: Arc<dyn ForecastStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn with_default_ttl(store: Arc<dyn ForecastStore>) -> Self {
        Self::new(store, DEFAULT_TTL)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up the cached forecast for a postal code.
    pub async fn fetch(&self, zip: &str) -> Result<Option<WeatherReport>, DomainError> {
        let key = self.normalize(zip)?;
        self.store
            .read(&key.store_key())
            .await
            .map_err(|e| wrap_store_failure("read", e))
    }

    /// Cache a forecast under a postal code with the configured TTL.
    ///
    /// An absent report is a no-op: nothing is never cached, so the next
    /// access recomputes.
    pub async fn write(
        &self,
        zip: &str,
        report: Option<&WeatherReport>,
    ) -> Result<(), DomainError> {
        self.write_with_ttl(zip, report, self.ttl).await
    }

    pub async fn write_with_ttl(
        &self,
        zip: &str,
        report: Option<&WeatherReport>,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        let key = self.normalize(zip)?;
        let Some(report) = report else {
            debug!(zip = %key, "Skipping cache write for absent report");
            return Ok(());
        };
        self.store
            .write(&key.store_key(), report, ttl)
            .await
            .map_err(|e| wrap_store_failure("write", e))
    }

    /// Fetch a cached forecast, or produce and cache one on a miss.
    ///
    /// The producer is never invoked on a hit. On a miss it runs exactly
    /// once: a produced report is written before returning `(report, false)`,
    /// an absent result is returned uncached, and a producer error
    /// propagates with nothing written. Concurrent misses on one key may
    /// each invoke their producer and each write (last write wins); there
    /// is no cross-request coordination here.
    pub async fn fetch_or_store<F, Fut>(
        &self,
        zip: &str,
        producer: F,
    ) -> Result<(Option<WeatherReport>, bool), DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<WeatherReport>, DomainError>>,
    {
        let key = self.normalize(zip)?;
        let store_key = key.store_key();

        if let Some(cached) = self
            .store
            .read(&store_key)
            .await
            .map_err(|e| wrap_store_failure("read", e))?
        {
            debug!(zip = %key, "Forecast cache hit");
            return Ok((Some(cached), true));
        }

        debug!(zip = %key, "Forecast cache miss");
        let produced = producer().await?;
        if let Some(report) = &produced {
            self.store
                .write(&store_key, report, self.ttl)
                .await
                .map_err(|e| wrap_store_failure("write", e))?;
        }
        Ok((produced, false))
    }

    /// Remove a cached forecast.
    pub async fn delete(&self, zip: &str) -> Result<(), DomainError> {
        let key = self.normalize(zip)?;
        self.store
            .delete(&key.store_key())
            .await
            .map_err(|e| wrap_store_failure("delete", e))
    }

    /// Whether an unexpired forecast exists for a postal code.
    pub async fn exists(&self, zip: &str) -> Result<bool, DomainError> {
        let key = self.normalize(zip)?;
        self.store
            .exists(&key.store_key())
            .await
            .map_err(|e| wrap_store_failure("exists", e))
    }

    fn normalize(&self, zip: &str) -> Result<PostalCode, DomainError> {
        let key = PostalCode::normalize(zip)?;
        if !key.is_us_format() {
            warn!(zip = %key, "Postal code does not match US ZIP format, caching anyway");
        }
        Ok(key)
    }
}

fn wrap_store_failure(operation: &'static str, cause: StoreError) -> DomainError {
    DomainError::CacheStoreFailed {
        operation,
        cause: cause.to_string(),
    }
}
