use crate::application::tooling::{Tool, ToolExecError};
use crate::types::ToolDefinition;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashSet;
use tracing::debug;

pub const NAME: &str = "checkFriendsAvailability";

pub struct FriendsAvailabilityTool {
    definition: ToolDefinition,
    available: HashSet<String>,
}

impl FriendsAvailabilityTool {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            definition: definition(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Check which friends are available (mock data)",
        json!({
            "type": "object",
            "properties": {
                "names": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Friends' names"
                }
            },
            "required": ["names"]
        }),
    )
}

#[async_trait]
impl Tool for FriendsAvailabilityTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Returns the requested names that are free, in request order.
    async fn invoke(&self, arguments: Value) -> Result<Value, ToolExecError> {
        let names = arguments
            .get("names")
            .and_then(Value::as_array)
            .ok_or_else(|| ToolExecError::Arguments("names must be an array".into()))?;

        let free: Vec<&str> = names
            .iter()
            .filter_map(Value::as_str)
            .filter(|name| self.available.contains(*name))
            .collect();
        debug!(requested = names.len(), free = free.len(), "Checked friend availability");
        Ok(json!(free))
    }
}
