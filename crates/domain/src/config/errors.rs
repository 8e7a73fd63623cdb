use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {cause}")]
    Io { path: String, cause: String },

    #[error("Failed to parse config file {path}: {cause}")]
    Parse { path: String, cause: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
