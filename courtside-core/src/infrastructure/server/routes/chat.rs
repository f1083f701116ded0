use super::super::dto::{ChatRequest, ErrorResponse};
use super::super::state::ServerState;
use crate::agent::{ChatResponse, ResponseAssembler};
use crate::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info, warn};

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Turn completed", body = ChatResponse),
        (status = 400, description = "Body unreadable or history empty", body = ErrorResponse),
        (status = 500, description = "Model provider failed", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejecting /api/chat request with unreadable body");
        (
            rejection.status(),
            Json(ErrorResponse::invalid_request(rejection.body_text())),
        )
    })?;

    info!(messages = request.messages.len(), "Received /api/chat request");

    if request.messages.is_empty() {
        warn!("Rejecting /api/chat request with empty history");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::invalid_request(
                "messages must contain at least one message",
            )),
        ));
    }

    match state.orchestrator().run_turn(&request.messages).await {
        Ok(reply) => {
            info!(kind = reply.kind(), "Turn completed");
            Ok(Json(ResponseAssembler::assemble(reply)))
        }
        Err(err) => {
            error!(%err, "Turn failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(err.kind(), err.user_message())),
            ))
        }
    }
}
