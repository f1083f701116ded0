use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{section}.endpoint' must not be empty")]
    MissingEndpoint { section: &'static str },

    #[error("'provider.model' must not be empty")]
    MissingModel,

    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("'{field}' must be greater than zero")]
    InvalidTimeout { field: &'static str },

    #[error("court entry #{index} has an empty name")]
    EmptyCourtName { index: usize },
}
