//! Configuration module for Zipcast
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web server binding
//! - `cache`: Forecast cache TTL
//! - `geocoding`: Geocoding upstream endpoint and timeout
//! - `weather`: Weather upstream endpoint and timeout
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod geocoding;
pub mod logging;
pub mod root;
pub mod server;
pub mod weather;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use geocoding::GeocodingConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use weather::WeatherConfig;
