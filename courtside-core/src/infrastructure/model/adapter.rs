//! Message adapters - convert between domain types and the OpenAI wire format

use crate::types::{ChatMessage, ToolDefinition};
use serde_json::{Value, json};

/// Adapter for converting messages and tool schemas to API formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert messages to OpenAI-style format
    /// Returns: [{"role": "...", "content": "..."}]
    pub fn to_openai_format(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|msg| {
                json!({
                    "role": msg.role.as_str(),
                    "content": msg.content.clone()
                })
            })
            .collect()
    }

    /// Convert tool definitions to OpenAI function declarations
    /// Returns: [{"type": "function", "function": {"name", "description", "parameters"}}]
    pub fn to_openai_tools(tools: &[ToolDefinition]) -> Vec<Value> {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name.clone(),
                        "description": tool.description.clone(),
                        "parameters": tool.parameters.clone()
                    }
                })
            })
            .collect()
    }
}
