//! The HTTP leg of a chat-completions provider.

use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Longest slice of an undecodable body that is kept in the error.
const BODY_EXCERPT_LEN: usize = 200;

/// One provider's completions URL plus the bearer key used to call it.
#[derive(Clone)]
pub struct CompletionEndpoint {
    provider: String,
    url: String,
    api_key: Option<String>,
    http: Client,
}

impl CompletionEndpoint {
    pub fn new(
        provider: impl Into<String>,
        endpoint: &str,
        api_path: &str,
        api_key: Option<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            url: join_url(endpoint, api_path),
            api_key,
            http: Client::new(),
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `body` and decodes the reply.
    ///
    /// Transport failures and non-2xx statuses are `Network` errors. A 2xx
    /// body that does not decode into `Res` is an `InvalidResponse`.
    pub async fn post_json<Req, Res>(&self, body: &Req) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.bearer_key()?;

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| ModelError::network(&self.provider, err))?;

        let status = response.status();
        let response = response.error_for_status().map_err(|err| {
            warn!(provider = self.provider.as_str(), %status, "Provider rejected the request");
            ModelError::network(&self.provider, err)
        })?;

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ModelError::network(&self.provider, err))?;
        decode_body(&self.provider, &bytes)
    }

    fn bearer_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ModelError::missing_api_key(&self.provider))
    }
}

fn join_url(endpoint: &str, api_path: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    let path = api_path.trim_start_matches('/');
    format!("{base}/{path}")
}

fn decode_body<Res: DeserializeOwned>(provider: &str, bytes: &[u8]) -> Result<Res, ModelError> {
    serde_json::from_slice(bytes).map_err(|err| {
        let text = String::from_utf8_lossy(bytes);
        let excerpt: String = text.chars().take(BODY_EXCERPT_LEN).collect();
        warn!(provider, %err, "Provider body did not decode");
        ModelError::invalid_response(provider, format!("undecodable body ({err}): {excerpt}"))
    })
}
