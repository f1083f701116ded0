use crate::constants::{DEFAULT_FALLBACK_TEXT, DEFAULT_SYSTEM_PROMPT, DEFAULT_TOOL_TIMEOUT_SECS};
use serde::Deserialize;
use std::time::Duration;

/// Turn-level behaviour of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Instruction injected ahead of every caller history.
    pub system_prompt: String,
    pub fallback_text: String,
    /// Run the tool calls of one turn concurrently.
    pub parallel_tools: bool,
    pub tool_timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
            parallel_tools: true,
            tool_timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawAgentConfig {
    pub(super) system_prompt: Option<String>,
    pub(super) fallback_text: Option<String>,
    pub(super) parallel_tools: Option<bool>,
    pub(super) tool_timeout_secs: Option<u64>,
}
