pub mod forecast_store;
pub mod geocoder;
pub mod weather_provider;

pub use forecast_store::{ForecastStore, StoreError};
pub use geocoder::Geocoder;
pub use weather_provider::WeatherProvider;
