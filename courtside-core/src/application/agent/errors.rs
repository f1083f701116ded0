use crate::model::ModelError;
use thiserror::Error;

/// Turn-level failure. Tool problems never appear here; they are reported
/// inside the reply.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("model provider call failed: {0}")]
    Upstream(#[from] ModelError),
}

impl AgentError {
    pub fn kind(&self) -> &'static str {
        match self {
            AgentError::Upstream(_) => "UpstreamError",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AgentError::Upstream(err) => err.user_message(),
        }
    }
}
