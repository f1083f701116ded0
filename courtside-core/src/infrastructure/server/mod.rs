mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use docs::ApiDoc;
pub use dto::{ChatRequest, ErrorBody, ErrorResponse, ToolListResponse};
pub use error::ServerError;
pub use router::router;

use crate::agent::TurnOrchestrator;
use crate::config::ServerConfig;
use crate::model::ModelProvider;
use std::sync::Arc;

/// Serve the REST surface until ctrl-c.
pub async fn serve<P>(
    orchestrator: Arc<TurnOrchestrator<P>>,
    config: &ServerConfig,
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(orchestrator, config).await
}
