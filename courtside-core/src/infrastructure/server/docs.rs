use super::dto::{ChatRequest, ErrorBody, ErrorResponse, ToolListResponse};
use super::routes;
use crate::agent::{AgentReply, ChatResponse};
use crate::tooling::{ErrorPayload, ToolInvocationResult};
use crate::types::{ChatMessage, MessageRole, ToolDefinition};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::chat::chat_handler, routes::tools::tools_handler),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            AgentReply,
            ToolInvocationResult,
            ErrorPayload,
            ErrorResponse,
            ErrorBody,
            ToolListResponse,
            ChatMessage,
            MessageRole,
            ToolDefinition
        )
    ),
    tags(
        (name = "chat", description = "Run one conversational turn through the tennis agent"),
        (name = "tools", description = "Tools the agent may call")
    )
)]
pub struct ApiDoc;
