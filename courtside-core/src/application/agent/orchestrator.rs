use super::errors::AgentError;
use super::models::AgentReply;
use crate::application::tooling::{ToolInvoker, ToolRegistry, failure_kinds};
use crate::config::AppConfig;
use crate::constants::{DEFAULT_FALLBACK_TEXT, TOOL_REASONING};
use crate::model::{ModelGateway, ModelProvider};
use crate::types::{ChatMessage, ToolDefinition};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Drives one request: a single completion, then either the tool path or the
/// text path. The model is not re-queried with tool results.
pub struct TurnOrchestrator<P: ModelProvider> {
    gateway: ModelGateway<P>,
    invoker: ToolInvoker,
    fallback_text: String,
}

impl<P: ModelProvider> TurnOrchestrator<P> {
    pub fn new(gateway: ModelGateway<P>, invoker: ToolInvoker) -> Self {
        Self {
            gateway,
            invoker,
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
        }
    }

    /// Wire provider and registry together using the configured model,
    /// instruction, fallback text, and timeouts.
    pub fn from_config(provider: P, registry: Arc<ToolRegistry>, config: &AppConfig) -> Self {
        let gateway = ModelGateway::new(
            provider,
            config.provider.model.clone(),
            config.agent.system_prompt.clone(),
        )
        .with_timeout(config.provider.timeout);
        let invoker = ToolInvoker::new(registry)
            .with_timeout(config.agent.tool_timeout)
            .with_parallel(config.agent.parallel_tools);
        Self::new(gateway, invoker).with_fallback_text(config.agent.fallback_text.clone())
    }

    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        self.invoker.registry().schemas()
    }

    pub fn gateway(&self) -> &ModelGateway<P> {
        &self.gateway
    }

    pub async fn run_turn(&self, history: &[ChatMessage]) -> Result<AgentReply, AgentError> {
        let completion = self
            .gateway
            .complete(history, self.tools())
            .await
            .map_err(|err| {
                error!(%err, "Completion failed, aborting turn");
                AgentError::Upstream(err)
            })?;

        if completion.has_tool_calls() {
            let calls = completion.tool_calls;
            info!(tool_calls = calls.len(), "Model requested tools");
            let tool_results = self.invoker.invoke_all(&calls).await;
            let failures = failure_kinds(&tool_results);
            if failures.is_empty() {
                info!(tool_calls = calls.len(), "Tool path completed");
            } else {
                warn!(
                    tool_calls = calls.len(),
                    failed = failures.len(),
                    kinds = ?failures,
                    "Tool path completed with failures"
                );
            }
            return Ok(AgentReply::Tool {
                reasoning: vec![TOOL_REASONING.to_string()],
                tool_results,
            });
        }

        let text = completion
            .content
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| {
                info!("Model returned empty content, using fallback text");
                self.fallback_text.clone()
            });
        Ok(AgentReply::Text { text })
    }
}
