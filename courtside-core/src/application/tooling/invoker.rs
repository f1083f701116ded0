use super::error::ToolExecError;
use super::registry::ToolRegistry;
use crate::types::ToolCallRequest;
use futures::FutureExt;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Map, Value};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

/// Why a single tool call produced no result. Reported to the client as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind")]
pub enum ErrorPayload {
    ArgumentParseError { message: String },
    SchemaValidationError { tool: String, message: String },
    UnknownTool { name: String },
    ToolExecutionError { tool: String, message: String },
}

impl ErrorPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorPayload::ArgumentParseError { .. } => "ArgumentParseError",
            ErrorPayload::SchemaValidationError { .. } => "SchemaValidationError",
            ErrorPayload::UnknownTool { .. } => "UnknownTool",
            ErrorPayload::ToolExecutionError { .. } => "ToolExecutionError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    Success(Value),
    Failure(ErrorPayload),
}

/// Outcome of one tool call, positioned like the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ToolInvocationResult {
    pub tool: String,
    #[schema(value_type = Object)]
    pub args: Value,
    pub success: bool,
    /// The tool's return value, or an `ErrorPayload` when `success` is false.
    #[schema(value_type = Object)]
    pub result: ToolOutcome,
}

impl ToolInvocationResult {
    fn succeeded(tool: impl Into<String>, args: Value, output: Value) -> Self {
        Self {
            tool: tool.into(),
            args,
            success: true,
            result: ToolOutcome::Success(output),
        }
    }

    fn failed(tool: impl Into<String>, args: Value, error: ErrorPayload) -> Self {
        Self {
            tool: tool.into(),
            args,
            success: false,
            result: ToolOutcome::Failure(error),
        }
    }

    pub fn output(&self) -> Option<&Value> {
        match &self.result {
            ToolOutcome::Success(value) => Some(value),
            ToolOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorPayload> {
        match &self.result {
            ToolOutcome::Success(_) => None,
            ToolOutcome::Failure(error) => Some(error),
        }
    }
}

/// Error kinds of the failed entries, in result order.
pub fn failure_kinds(results: &[ToolInvocationResult]) -> Vec<&'static str> {
    results
        .iter()
        .filter_map(|result| result.error().map(ErrorPayload::kind))
        .collect()
}

/// Validates and executes model-requested tool calls against a registry.
/// Never fails: every problem becomes an [`ErrorPayload`] entry.
#[derive(Debug, Clone)]
pub struct ToolInvoker {
    registry: Arc<ToolRegistry>,
    timeout: Option<Duration>,
    parallel: bool,
}

impl ToolInvoker {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            timeout: None,
            parallel: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Execute every call and return results in request order.
    pub async fn invoke_all(&self, calls: &[ToolCallRequest]) -> Vec<ToolInvocationResult> {
        if self.parallel {
            // join_all yields outputs in input order regardless of completion order.
            join_all(calls.iter().map(|call| self.invoke(call))).await
        } else {
            let mut results = Vec::with_capacity(calls.len());
            for call in calls {
                results.push(self.invoke(call).await);
            }
            results
        }
    }

    pub async fn invoke(&self, call: &ToolCallRequest) -> ToolInvocationResult {
        let args = match parse_arguments(&call.raw_arguments) {
            Ok(args) => args,
            Err(error) => {
                warn!(tool = %call.name, call_id = %call.id, %error, "Tool arguments are not valid JSON");
                return ToolInvocationResult::failed(
                    &call.name,
                    Value::Object(Map::new()),
                    ErrorPayload::ArgumentParseError {
                        message: error.to_string(),
                    },
                );
            }
        };

        let Some(entry) = self.registry.resolve(&call.name) else {
            warn!(requested_tool = %call.name, call_id = %call.id, "Unknown tool requested by model");
            return ToolInvocationResult::failed(
                &call.name,
                args,
                ErrorPayload::UnknownTool {
                    name: call.name.clone(),
                },
            );
        };

        if let Err(message) = entry.validate(&args) {
            warn!(tool = %call.name, call_id = %call.id, %message, "Tool arguments failed schema validation");
            return ToolInvocationResult::failed(
                &call.name,
                args,
                ErrorPayload::SchemaValidationError {
                    tool: call.name.clone(),
                    message,
                },
            );
        }

        info!(tool = %call.name, call_id = %call.id, args = %args, "Tool invoked");
        let execution = AssertUnwindSafe(entry.tool().invoke(args.clone()))
            .catch_unwind()
            .map(|outcome| outcome.unwrap_or(Err(ToolExecError::Panicked)));
        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, execution)
                .await
                .unwrap_or(Err(ToolExecError::Timeout(limit))),
            None => execution.await,
        };

        match outcome {
            Ok(output) => {
                debug!(tool = %call.name, call_id = %call.id, "Tool executed");
                ToolInvocationResult::succeeded(&call.name, args, output)
            }
            Err(error) => {
                warn!(tool = %call.name, call_id = %call.id, %error, "Tool execution failed");
                ToolInvocationResult::failed(
                    &call.name,
                    args,
                    ErrorPayload::ToolExecutionError {
                        tool: call.name.clone(),
                        message: error.to_string(),
                    },
                )
            }
        }
    }
}

fn parse_arguments(raw: &str) -> Result<Value, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(raw)
}
