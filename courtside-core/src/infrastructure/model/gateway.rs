use super::traits::ModelProvider;
use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::types::{ChatMessage, ToolDefinition};
use std::time::Duration;
use tracing::{debug, warn};

/// Single entry point for completion calls.
///
/// Owns the system instruction: it is always sent as the first message, ahead
/// of anything the caller supplied. No retries happen at this layer.
pub struct ModelGateway<P: ModelProvider> {
    provider: P,
    model: String,
    system_prompt: String,
    timeout: Option<Duration>,
}

impl<P: ModelProvider> ModelGateway<P> {
    pub fn new(provider: P, model: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            system_prompt: system_prompt.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub async fn complete(
        &self,
        history: &[ChatMessage],
        schemas: &[ToolDefinition],
    ) -> Result<ModelResponse, ModelError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend_from_slice(history);

        let request = ModelRequest {
            model: self.model.clone(),
            messages,
            tools: schemas.to_vec(),
        };
        debug!(
            provider = self.provider.id(),
            history = history.len(),
            tools = schemas.len(),
            "Dispatching completion"
        );

        let call = self.provider.complete(request);
        let Some(limit) = self.timeout else {
            return call.await;
        };
        match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(provider = self.provider.id(), timeout_secs = limit.as_secs(), "Completion timed out");
                Err(ModelError::timeout(self.provider.id(), limit))
            }
        }
    }
}
