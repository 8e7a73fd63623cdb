use zipcast_domain::{CliOverrides, Config, ConfigError};

#[test]
fn defaults_are_complete_and_valid() {
    let config = Config::load(None, CliOverrides::default()).unwrap();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.cache.ttl_seconds, 1800);
    assert_eq!(config.geocoding.timeout_seconds, 5);
    assert_eq!(config.weather.timeout_seconds, 10);
    assert_eq!(config.logging.level, "info");

    config.validate().unwrap();
}

#[test]
fn partial_toml_fills_in_defaults() {
    let config: Config = toml::from_str(
        r#"
        [cache]
        ttl_seconds = 60

        [server]
        web_port = 3000
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.ttl_seconds, 60);
    assert_eq!(config.server.web_port, 3000);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.weather.endpoint, "https://api.open-meteo.com");
}

#[test]
fn cli_overrides_take_precedence() {
    let overrides = CliOverrides {
        web_port: Some(9090),
        bind_address: Some("127.0.0.1".to_string()),
        log_level: Some("debug".to_string()),
    };
    let config = Config::load(None, overrides).unwrap();

    assert_eq!(config.server.web_port, 9090);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn zero_ttl_is_rejected() {
    let mut config = Config::default();
    config.cache.ttl_seconds = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn non_http_endpoint_is_rejected() {
    let mut config = Config::default();
    config.weather.endpoint = "ftp://weather.example".to_string();

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let result = Config::load(Some("/nonexistent/zipcast.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}
