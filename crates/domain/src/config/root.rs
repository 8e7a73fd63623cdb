use super::{
    CacheConfig, ConfigError, GeocodingConfig, LoggingConfig, ServerConfig, WeatherConfig,
};
use serde::{Deserialize, Serialize};

/// Main application configuration.
///
/// Every section has serde defaults, so a partial (or absent) TOML file
/// yields a complete configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub geocoding: GeocodingConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI
    /// overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                    path: path.to_string(),
                    cause: e.to_string(),
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::Parse {
                    path: path.to_string(),
                    cause: e.to_string(),
                })?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.ttl_seconds == 0 {
            return Err(ConfigError::Invalid(
                "cache.ttl_seconds must be greater than zero".to_string(),
            ));
        }
        if self.geocoding.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "geocoding.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.weather.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        validate_endpoint("geocoding.endpoint", &self.geocoding.endpoint)?;
        validate_endpoint("weather.endpoint", &self.weather.endpoint)?;
        Ok(())
    }
}

fn validate_endpoint(field: &str, url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Invalid(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}
