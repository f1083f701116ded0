use std::time::Duration;
use thiserror::Error;

/// Failure raised by a tool implementation.
#[derive(Debug, Error)]
pub enum ToolExecError {
    #[error("request to {service} failed: {source}")]
    Http {
        service: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned an unexpected response: {reason}")]
    InvalidResponse { service: String, reason: String },
    #[error("{service} requires an API key")]
    MissingApiKey { service: String },
    #[error("invalid arguments: {0}")]
    Arguments(String),
    #[error("timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),
    #[error("tool panicked during execution")]
    Panicked,
    #[error("{0}")]
    Failed(String),
}

impl ToolExecError {
    pub fn http(service: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            service: service.into(),
            source,
        }
    }

    pub fn invalid_response(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            service: service.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_api_key(service: impl Into<String>) -> Self {
        Self::MissingApiKey {
            service: service.into(),
        }
    }
}

/// Errors raised while assembling the tool catalog at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("tool '{name}' is registered more than once")]
    Duplicate { name: String },
    #[error("tool name must not be empty")]
    EmptyName,
    #[error("tool '{name}' has an invalid parameter schema: {reason}")]
    InvalidSchema { name: String, reason: String },
}
