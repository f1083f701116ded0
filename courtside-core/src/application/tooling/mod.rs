mod error;
mod invoker;
mod registry;
mod schema;

pub use error::{RegistryError, ToolExecError};
pub use invoker::{ErrorPayload, ToolInvocationResult, ToolInvoker, ToolOutcome, failure_kinds};
pub use registry::{FnTool, RegisteredTool, Tool, ToolRegistry, ToolRegistryBuilder};
pub use schema::ArgumentSchema;
