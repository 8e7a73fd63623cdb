//! Zipcast Infrastructure Layer
pub mod geocoding;
pub mod store;
pub mod weather;

pub use geocoding::NominatimGeocoder;
pub use store::MemoryForecastStore;
pub use weather::OpenMeteoClient;
