pub mod forecast_cache;

pub use forecast_cache::{ForecastCache, DEFAULT_TTL};
