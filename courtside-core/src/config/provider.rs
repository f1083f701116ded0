//! # Provider Configuration
//!
//! Connection settings for the OpenAI-compatible chat-completions provider.
//!
//! ```toml
//! [provider]
//! endpoint = "https://api.openai.com"
//! api_path = "/v1/chat/completions"
//! api_key = "OPENAI_API_KEY"
//! model = "gpt-4o-mini"
//! timeout_secs = 60
//! ```
//!
//! `api_key` names the environment variable holding the key, never the key itself.

use crate::constants::{
    DEFAULT_MODEL, DEFAULT_MODEL_TIMEOUT_SECS, DEFAULT_OPENAI_API_KEY_ENV,
    DEFAULT_OPENAI_API_PATH, DEFAULT_OPENAI_ENDPOINT,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the provider, without the API path.
    pub endpoint: String,
    pub api_path: String,
    /// Name of the environment variable holding the API key.
    pub api_key: Option<String>,
    pub model: String,
    /// Upper bound on a single completion call.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            api_path: DEFAULT_OPENAI_API_PATH.to_string(),
            api_key: Some(DEFAULT_OPENAI_API_KEY_ENV.to_string()),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawProviderConfig {
    pub(super) endpoint: Option<String>,
    pub(super) api_path: Option<String>,
    pub(super) api_key: Option<String>,
    pub(super) model: Option<String>,
    pub(super) timeout_secs: Option<u64>,
}
