//! OpenAI-compatible client implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::endpoint::CompletionEndpoint;
use crate::config::{ProviderConfig, resolve_api_key};
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};
use crate::types::ToolCallRequest;

const PROVIDER_ID: &str = "openai";

/// OpenAI-compatible chat-completions client with function calling
#[derive(Clone)]
pub struct OpenAIClient {
    endpoint: CompletionEndpoint,
}

impl OpenAIClient {
    pub fn from_config(config: &ProviderConfig) -> Self {
        let api_key = resolve_api_key(PROVIDER_ID, config.api_key.as_deref());
        Self::new(config.endpoint.clone(), config.api_path.clone(), api_key)
    }

    pub fn new(endpoint: String, api_path: String, api_key: Option<String>) -> Self {
        Self {
            endpoint: CompletionEndpoint::new(PROVIDER_ID, &endpoint, &api_path, api_key),
        }
    }
}

#[async_trait]
impl ModelProvider for OpenAIClient {
    fn id(&self) -> &str {
        self.endpoint.provider()
    }

    async fn complete(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let payload = OpenAIRequest {
            model: request.model.clone(),
            messages: MessageAdapter::to_openai_format(&request.messages),
            tools: MessageAdapter::to_openai_tools(&request.tools),
            stream: false,
        };

        info!(
            provider = self.endpoint.provider(),
            url = self.endpoint.url(),
            model = request.model.as_str(),
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self.endpoint.post_json(&payload).await?;
        debug!("Received response from OpenAI-compatible provider");

        response.normalize(self.endpoint.provider())
    }
}

#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<OpenAIToolCall>>,
}

#[derive(Deserialize)]
struct OpenAIToolCall {
    #[serde(default)]
    id: String,
    function: OpenAIFunctionCall,
}

#[derive(Deserialize)]
struct OpenAIFunctionCall {
    name: String,
    /// Normally a JSON-encoded string; some compatible servers send an object.
    #[serde(default)]
    arguments: Value,
}

impl OpenAIResponse {
    fn normalize(self, provider: &str) -> Result<ModelResponse, ModelError> {
        let message = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .ok_or_else(|| ModelError::invalid_response(provider, "missing message"))?;

        let tool_calls = message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| {
                let raw_arguments = match call.function.arguments {
                    Value::String(raw) => raw,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                ToolCallRequest::new(call.id, call.function.name, raw_arguments)
            })
            .collect();

        Ok(ModelResponse {
            content: message.content,
            tool_calls,
        })
    }
}
