use super::models::AgentReply;
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a successful `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChatResponse {
    pub reply: AgentReply,
}

/// Maps orchestrator output onto the transport shape.
pub struct ResponseAssembler;

impl ResponseAssembler {
    pub fn assemble(reply: AgentReply) -> ChatResponse {
        ChatResponse { reply }
    }
}

impl From<AgentReply> for ChatResponse {
    fn from(reply: AgentReply) -> Self {
        ResponseAssembler::assemble(reply)
    }
}
