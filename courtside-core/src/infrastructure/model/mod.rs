//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelProvider trait
//! - `adapter` - OpenAI wire-format adapters
//! - `clients` - HTTP client implementations
//! - `gateway` - ModelGateway, which injects the system instruction and bounds each call

pub mod adapter;
pub mod clients;
pub mod gateway;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clients::OpenAIClient;
pub use gateway::ModelGateway;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
