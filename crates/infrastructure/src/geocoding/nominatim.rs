//! Forward geocoding via Nominatim (OpenStreetMap).
//!
//! Free endpoint, no API key required. Requests carry an identifying
//! User-Agent per the Nominatim usage policy.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use zipcast_application::ports::Geocoder;
use zipcast_domain::config::GeocodingConfig;
use zipcast_domain::{DomainError, GeocodedAddress, PostalCode};

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    address: Option<SearchAddress>,
}

#[derive(Debug, Deserialize)]
struct SearchAddress {
    postcode: Option<String>,
}

pub struct NominatimGeocoder {
    http: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Nominatim serializes coordinates as strings; a value that does not
    /// parse is a malformed payload, which counts as a service failure.
    fn parse_coordinate(raw: &str, which: &str) -> Result<f64, DomainError> {
        raw.parse().map_err(|_| {
            DomainError::GeocodingFailed(format!("invalid {which} in response: {raw}"))
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedAddress>, DomainError> {
        let url = format!("{}/search", self.endpoint);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", address),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| DomainError::GeocodingFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::GeocodingFailed(format!(
                "geocoding service returned status {}",
                response.status()
            )));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| DomainError::GeocodingFailed(format!("unparsable response: {e}")))?;

        let Some(result) = results.into_iter().next() else {
            debug!(address, "No geocoding result");
            return Ok(None);
        };

        let Some(postcode) = result.address.and_then(|a| a.postcode) else {
            debug!(address, "Geocoding result has no postal code");
            return Ok(None);
        };

        // A blank postal code counts as "no postal code", not as a failure.
        let Ok(postal_code) = PostalCode::normalize(&postcode) else {
            debug!(address, "Geocoding result has a blank postal code");
            return Ok(None);
        };

        let latitude = Self::parse_coordinate(&result.lat, "latitude")?;
        let longitude = Self::parse_coordinate(&result.lon, "longitude")?;

        let geocoded = GeocodedAddress::new(latitude, longitude, postal_code).map_err(|e| {
            DomainError::GeocodingFailed(format!("invalid coordinates in response: {e}"))
        })?;

        debug!(
            address,
            latitude,
            longitude,
            zip = %geocoded.postal_code(),
            "Address geocoded"
        );
        Ok(Some(geocoded))
    }
}
