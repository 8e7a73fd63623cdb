#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use zipcast_application::ports::{ForecastStore, Geocoder, StoreError, WeatherProvider};
use zipcast_domain::{DomainError, GeocodedAddress, PostalCode, WeatherReport};

/// Report with plausible high/low around the given current temperature.
pub fn report(temp: f64) -> WeatherReport {
    WeatherReport::new(
        temp,
        Some(temp + 10.0),
        Some(temp - 10.0),
        serde_json::json!({ "current_weather": { "temperature": temp } }),
    )
}

// ============================================================================
// Mock ForecastStore
// ============================================================================

#[derive(Default)]
pub struct MockForecastStore {
    entries: RwLock<HashMap<String, WeatherReport>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_deletes: AtomicBool,
    fail_exists: AtomicBool,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub deletes: AtomicUsize,
    pub exists_checks: AtomicUsize,
    pub last_write_ttl: RwLock<Option<Duration>>,
}

impl MockForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails every operation.
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail_reads.store(true, Ordering::SeqCst);
        store.fail_writes.store(true, Ordering::SeqCst);
        store.fail_deletes.store(true, Ordering::SeqCst);
        store.fail_exists.store(true, Ordering::SeqCst);
        store
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_exists(&self, fail: bool) {
        self.fail_exists.store(fail, Ordering::SeqCst);
    }

    /// Pre-populate an entry under a raw store key.
    pub async fn insert(&self, key: &str, report: WeatherReport) {
        self.entries.write().await.insert(key.to_string(), report);
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub fn total_calls(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
            + self.writes.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
            + self.exists_checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastStore for MockForecastStore {
    async fn read(&self, key: &str) -> Result<Option<WeatherReport>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::new("mock store read failure"));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(
        &self,
        key: &str,
        report: &WeatherReport,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::new("mock store write failure"));
        }
        *self.last_write_ttl.write().await = Some(ttl);
        self.entries
            .write()
            .await
            .insert(key.to_string(), report.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StoreError::new("mock store delete failure"));
        }
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.exists_checks.fetch_add(1, Ordering::SeqCst);
        if self.fail_exists.load(Ordering::SeqCst) {
            return Err(StoreError::new("mock store exists failure"));
        }
        Ok(self.entries.read().await.contains_key(key))
    }
}

// ============================================================================
// Mock Geocoder
// ============================================================================

#[derive(Default)]
pub struct MockGeocoder {
    results: RwLock<HashMap<String, GeocodedAddress>>,
    should_fail: AtomicBool,
    pub lookups: AtomicUsize,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_result(&self, address: &str, latitude: f64, longitude: f64, zip: &str) {
        let geocoded = GeocodedAddress::new(
            latitude,
            longitude,
            PostalCode::normalize(zip).unwrap(),
        )
        .unwrap();
        self.results
            .write()
            .await
            .insert(address.to_string(), geocoded);
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedAddress>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::GeocodingFailed(
                "mock geocoder failure".to_string(),
            ));
        }
        Ok(self.results.read().await.get(address).cloned())
    }
}

// ============================================================================
// Mock WeatherProvider
// ============================================================================

pub struct MockWeatherProvider {
    report: RwLock<WeatherReport>,
    should_fail: AtomicBool,
    pub fetches: AtomicUsize,
}

impl MockWeatherProvider {
    pub fn new(report: WeatherReport) -> Self {
        Self {
            report: RwLock::new(report),
            should_fail: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn fetch(&self, _latitude: f64, _longitude: f64) -> Result<WeatherReport, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::WeatherApiStatus(503));
        }
        Ok(self.report.read().await.clone())
    }
}
