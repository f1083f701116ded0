use super::error::{RegistryError, ToolExecError};
use super::schema::ArgumentSchema;
use crate::types::ToolDefinition;
use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// A capability the model may ask to run.
#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> &ToolDefinition;

    /// Run the tool with arguments that already passed schema validation.
    async fn invoke(&self, arguments: Value) -> Result<Value, ToolExecError>;
}

type ToolHandler = dyn Fn(Value) -> BoxFuture<'static, Result<Value, ToolExecError>> + Send + Sync;

/// Adapts a plain async closure into a [`Tool`].
pub struct FnTool {
    definition: ToolDefinition,
    handler: Box<ToolHandler>,
}

impl FnTool {
    pub fn new<F, Fut>(definition: ToolDefinition, handler: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolExecError>> + Send + 'static,
    {
        Self {
            definition,
            handler: Box::new(move |arguments| handler(arguments).boxed()),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, arguments: Value) -> Result<Value, ToolExecError> {
        (self.handler)(arguments).await
    }
}

/// A registered tool with its compiled parameter schema.
pub struct RegisteredTool {
    tool: Arc<dyn Tool>,
    schema: ArgumentSchema,
}

impl RegisteredTool {
    pub fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }

    pub fn validate(&self, arguments: &Value) -> Result<(), String> {
        self.schema.validate(arguments)
    }
}

/// Immutable tool catalog. Built once at startup and shared behind an `Arc`.
pub struct ToolRegistry {
    definitions: Vec<ToolDefinition>,
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Tool schemas in registration order.
    pub fn schemas(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    pub fn resolve(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&slot| &self.tools[slot])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field(
                "tools",
                &self.definitions.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[derive(Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistryBuilder {
    pub fn register<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.push(Arc::new(tool));
        self
    }

    pub fn register_fn<F, Fut>(self, definition: ToolDefinition, handler: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolExecError>> + Send + 'static,
    {
        self.register(FnTool::new(definition, handler))
    }

    pub fn build(self) -> Result<ToolRegistry, RegistryError> {
        let mut definitions = Vec::with_capacity(self.tools.len());
        let mut tools = Vec::with_capacity(self.tools.len());
        let mut index = HashMap::with_capacity(self.tools.len());

        for (slot, tool) in self.tools.into_iter().enumerate() {
            let definition = tool.definition().clone();
            let schema = check_definition(&definition)?;
            if index.insert(definition.name.clone(), slot).is_some() {
                return Err(RegistryError::Duplicate {
                    name: definition.name,
                });
            }
            debug!(tool = definition.name.as_str(), "Registered tool");
            definitions.push(definition);
            tools.push(RegisteredTool { tool, schema });
        }

        Ok(ToolRegistry {
            definitions,
            tools,
            index,
        })
    }
}

fn check_definition(definition: &ToolDefinition) -> Result<ArgumentSchema, RegistryError> {
    if definition.name.trim().is_empty() {
        return Err(RegistryError::EmptyName);
    }
    let invalid = |reason: &str| RegistryError::InvalidSchema {
        name: definition.name.clone(),
        reason: reason.to_string(),
    };
    let schema = definition
        .parameters
        .as_object()
        .ok_or_else(|| invalid("parameters must be a JSON object"))?;
    if !matches!(schema.get("type").and_then(Value::as_str), Some("object") | None) {
        return Err(invalid("top-level type must be \"object\""));
    }
    ArgumentSchema::compile(&definition.parameters).map_err(|reason| invalid(&reason))
}
