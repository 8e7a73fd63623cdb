use crate::ports::{Geocoder, WeatherProvider};
use crate::services::ForecastCache;
use std::sync::Arc;
use tracing::{info, warn};
use zipcast_domain::{DomainError, WeatherReport};

/// Result of a forecast request: the report plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub postal_code: String,
    pub report: WeatherReport,
    pub cache_hit: bool,
}

/// Resolves an address to current weather, consulting the cache by ZIP.
pub struct GetForecastUseCase {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    cache: ForecastCache,
}

impl GetForecastUseCase {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
        cache: ForecastCache,
    ) -> Self {
        Self {
            geocoder,
            weather,
            cache,
        }
    }

    /// `Ok(None)` means the address could not be geocoded to a postal code.
    ///
    /// A failing cache store degrades to a direct weather fetch, so the
    /// request behaves as if caching were disabled. Geocoding and weather
    /// failures are fatal to the request and propagate.
    pub async fn execute(&self, address: &str) -> Result<Option<Forecast>, DomainError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(DomainError::InvalidAddress(
                "address cannot be blank".to_string(),
            ));
        }

        let Some(geocoded) = self.geocoder.geocode(address).await? else {
            info!(address, "Address did not geocode to a postal code");
            return Ok(None);
        };

        let zip = geocoded.postal_code().as_str().to_string();
        let latitude = geocoded.latitude();
        let longitude = geocoded.longitude();

        let weather = Arc::clone(&self.weather);
        let outcome = self
            .cache
            .fetch_or_store(&zip, move || async move {
                weather.fetch(latitude, longitude).await.map(Some)
            })
            .await;

        let (report, cache_hit) = match outcome {
            Ok((Some(report), cache_hit)) => (report, cache_hit),
            // The producer above always yields a report on success, so an
            // absent miss result means the store handed back nothing after
            // a successful write path. Treat it as an upstream fault.
            Ok((None, _)) => {
                return Err(DomainError::InvalidWeatherResponse(
                    "weather provider returned no conditions".to_string(),
                ))
            }
            Err(e) if e.is_cache_failure() => {
                warn!(zip = %zip, error = %e, "Forecast cache unavailable, fetching without caching");
                (self.weather.fetch(latitude, longitude).await?, false)
            }
            Err(e) => return Err(e),
        };

        info!(zip = %zip, cache_hit, "Forecast resolved");
        Ok(Some(Forecast {
            postal_code: zip,
            report,
            cache_hit,
        }))
    }
}
