//! Tower service running operations against the job seeker agent

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use tower_service::Service;
use tracing::debug;

use crate::{
    agent::JobSeekerAgent,
    protocol::{error::A2AError, task::TaskResult},
    service::A2ARequest,
};

/// Service that hands each request's operation to the agent
///
/// Always ready; requests are independent apart from the per-context history
/// lock the agent takes.
#[derive(Debug, Clone)]
pub struct AgentService {
    agent: Arc<JobSeekerAgent>,
}

impl AgentService {
    /// Create a new agent service
    pub fn new(agent: Arc<JobSeekerAgent>) -> Self {
        Self { agent }
    }
}

impl Service<A2ARequest> for AgentService {
    type Response = TaskResult;
    type Error = A2AError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: A2ARequest) -> Self::Future {
        let agent = self.agent.clone();

        Box::pin(async move {
            debug!(id = %req.id, method = req.operation.method(), "Dispatching operation");
            agent.handle(req.operation).await
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        extractor::HeuristicExtractor,
        history::HistoryStore,
        protocol::{message::Message, operation::A2AOperation, task::TaskState},
        provider::JobSearchClient,
    };

    use super::*;

    fn service() -> AgentService {
        AgentService::new(Arc::new(JobSeekerAgent::new(
            Arc::new(HeuristicExtractor::new()),
            JobSearchClient::mock(),
            Arc::new(HistoryStore::new()),
        )))
    }

    #[tokio::test]
    async fn test_service_send_message() {
        let mut service = service();

        let operation = A2AOperation::SendMessage {
            message: Message::user("backend engineer"),
            configuration: None,
        };

        let task = service.call(A2ARequest::new(json!(1), operation)).await.unwrap();

        assert_eq!(task.status.state, TaskState::InputRequired);
        assert_eq!(task.artifacts.len(), 3);
        assert_eq!(task.history.len(), 2);
    }

    #[tokio::test]
    async fn test_service_error_handling() {
        let mut service = service();

        let operation = A2AOperation::Execute {
            messages: Vec::new(),
            context_id: None,
            task_id: None,
        };

        let result = service.call(A2ARequest::new(json!("req"), operation)).await;

        assert!(matches!(result.unwrap_err(), A2AError::InvalidParams(_)));
    }
}
