//! In-memory forecast store backed by DashMap.

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use zipcast_application::ports::{ForecastStore, StoreError};
use zipcast_domain::WeatherReport;

struct StoredEntry {
    report: WeatherReport,
    expires_at: Instant,
}

impl StoredEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-local [`ForecastStore`] with per-entry TTL.
///
/// Expired entries are dropped lazily when they are next touched; there is
/// no background sweeper. Concurrent access is handled by DashMap's
/// internal sharding.
#[derive(Default)]
pub struct MemoryForecastStore {
    entries: DashMap<String, StoredEntry>,
}

impl MemoryForecastStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ForecastStore for MemoryForecastStore {
    async fn read(&self, key: &str) -> Result<Option<WeatherReport>, StoreError> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                drop(entry);
                self.entries.remove(key);
                return Ok(None);
            }
            return Ok(Some(entry.report.clone()));
        }
        Ok(None)
    }

    async fn write(
        &self,
        key: &str,
        report: &WeatherReport,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let entry = StoredEntry {
            report: report.clone(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key.to_string(), entry);
        debug!(key, ttl_secs = ttl.as_secs(), "Stored forecast");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                drop(entry);
                self.entries.remove(key);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}
