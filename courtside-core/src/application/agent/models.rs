use crate::application::tooling::ToolInvocationResult;
use serde::Serialize;
use utoipa::ToSchema;

/// Result of one turn. Exactly one variant is produced per request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AgentReply {
    /// The model asked for tools; results are positioned like its requests.
    Tool {
        reasoning: Vec<String>,
        #[serde(rename = "toolResults")]
        tool_results: Vec<ToolInvocationResult>,
    },
    /// The model answered directly.
    Text { text: String },
}

impl AgentReply {
    pub fn kind(&self) -> &'static str {
        match self {
            AgentReply::Tool { .. } => "tool",
            AgentReply::Text { .. } => "text",
        }
    }

    pub fn tool_results(&self) -> &[ToolInvocationResult] {
        match self {
            AgentReply::Tool { tool_results, .. } => tool_results,
            AgentReply::Text { .. } => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            AgentReply::Text { text } => Some(text),
            AgentReply::Tool { .. } => None,
        }
    }
}
