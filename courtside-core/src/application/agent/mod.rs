mod errors;
mod models;
mod orchestrator;
mod response;

pub use errors::AgentError;
pub use models::AgentReply;
pub use orchestrator::TurnOrchestrator;
pub use response::{ChatResponse, ResponseAssembler};
