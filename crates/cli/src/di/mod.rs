//! Dependency wiring for the web service.

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use zipcast_api::AppState;
use zipcast_application::services::ForecastCache;
use zipcast_application::use_cases::GetForecastUseCase;
use zipcast_domain::Config;
use zipcast_infrastructure::{MemoryForecastStore, NominatimGeocoder, OpenMeteoClient};

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let geocoder =
        NominatimGeocoder::new(&config.geocoding).context("Failed to build geocoding client")?;
    let weather =
        OpenMeteoClient::new(&config.weather).context("Failed to build weather client")?;

    let store = Arc::new(MemoryForecastStore::new());
    let cache = ForecastCache::new(store, Duration::from_secs(config.cache.ttl_seconds));

    let get_forecast = GetForecastUseCase::new(Arc::new(geocoder), Arc::new(weather), cache);

    Ok(AppState {
        get_forecast: Arc::new(get_forecast),
    })
}
