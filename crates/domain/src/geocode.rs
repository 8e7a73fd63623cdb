use crate::errors::DomainError;
use crate::postal_code::PostalCode;

/// A geocoded street address: coordinates plus the postal code they fall in.
///
/// Immutable once constructed; [`GeocodedAddress::new`] enforces coordinate
/// ranges so every value in circulation is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    latitude: f64,
    longitude: f64,
    postal_code: PostalCode,
}

impl GeocodedAddress {
    pub fn new(
        latitude: f64,
        longitude: f64,
        postal_code: PostalCode,
    ) -> Result<Self, DomainError> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            postal_code,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }
}

/// Range check shared by the geocoder and the weather client.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(DomainError::InvalidCoordinates(format!(
            "latitude {latitude} outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(DomainError::InvalidCoordinates(format!(
            "longitude {longitude} outside [-180, 180]"
        )));
    }
    Ok(())
}
