use crate::application::tooling::{Tool, ToolExecError};
use crate::config::CourtConfig;
use crate::types::ToolDefinition;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

pub const NAME: &str = "findTennisCourts";

/// Court search backed by the configured court list.
pub struct TennisCourtsTool {
    definition: ToolDefinition,
    courts: Vec<CourtConfig>,
}

impl TennisCourtsTool {
    pub fn new(courts: Vec<CourtConfig>) -> Self {
        Self {
            definition: definition(),
            courts,
        }
    }
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Find nearby tennis courts by city (mock data)",
        json!({
            "type": "object",
            "properties": {
                "location": { "type": "string" }
            },
            "required": ["location"]
        }),
    )
}

#[async_trait]
impl Tool for TennisCourtsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolExecError> {
        // The listing is not location-aware yet; the argument is only logged.
        let location = arguments.get("location").and_then(Value::as_str).unwrap_or_default();
        debug!(location, courts = self.courts.len(), "Listing tennis courts");
        serde_json::to_value(&self.courts).map_err(|e| ToolExecError::Failed(e.to_string()))
    }
}
