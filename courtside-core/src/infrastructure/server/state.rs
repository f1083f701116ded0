use crate::agent::TurnOrchestrator;
use crate::model::ModelProvider;
use std::sync::Arc;

pub(crate) struct ServerState<P: ModelProvider> {
    orchestrator: Arc<TurnOrchestrator<P>>,
}

impl<P: ModelProvider> ServerState<P> {
    pub(crate) fn new(orchestrator: Arc<TurnOrchestrator<P>>) -> Self {
        Self { orchestrator }
    }

    pub(crate) fn orchestrator(&self) -> &TurnOrchestrator<P> {
        &self.orchestrator
    }
}
