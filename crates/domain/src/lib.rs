//! Zipcast Domain Layer
pub mod config;
pub mod errors;
pub mod geocode;
pub mod postal_code;
pub mod weather;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use geocode::GeocodedAddress;
pub use postal_code::PostalCode;
pub use weather::WeatherReport;
