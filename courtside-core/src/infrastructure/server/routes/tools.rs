use super::super::dto::ToolListResponse;
use super::super::state::ServerState;
use crate::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/api/tools",
    tag = "tools",
    responses(
        (status = 200, description = "Tool schemas offered to the model", body = ToolListResponse)
    )
)]
pub async fn tools_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Json<ToolListResponse> {
    let tools = state.orchestrator().tools().to_vec();
    debug!(tool_count = tools.len(), "Serving /api/tools request");
    Json(ToolListResponse { tools })
}
