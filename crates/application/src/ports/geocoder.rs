use async_trait::async_trait;
use zipcast_domain::{DomainError, GeocodedAddress};

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a street address to coordinates and a postal code.
    ///
    /// Returns `Ok(None)` when the address yields no result or the result
    /// lacks a postal code; absence is a normal outcome, not a failure.
    /// Only transport and service problems surface as
    /// [`DomainError::GeocodingFailed`].
    async fn geocode(&self, address: &str) -> Result<Option<GeocodedAddress>, DomainError>;
}
