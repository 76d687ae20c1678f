//! Validation layer for agent requests and task results

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower_layer::Layer;
use tower_service::Service;
use tracing::warn;

use crate::{
    protocol::{error::A2AError, message::Role, task::TaskResult},
    service::A2ARequest,
};

/// Layer that validates operations before dispatch and task results after
#[derive(Clone, Debug, Default)]
pub struct A2AValidationLayer;

impl A2AValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for A2AValidationLayer {
    type Service = A2AValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        A2AValidationService { inner }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone, Debug)]
pub struct A2AValidationService<S> {
    inner: S,
}

impl<S> A2AValidationService<S> {
    /// Reject operations the agent cannot answer
    fn validate_request(req: &A2ARequest) -> Result<(), A2AError> {
        let messages = req.operation.messages();

        if messages.is_empty() {
            return Err(A2AError::InvalidParams(
                "messages must contain at least one message".into(),
            ));
        }

        for (i, message) in messages.iter().enumerate() {
            if message.parts.is_empty() {
                return Err(A2AError::InvalidParams(format!(
                    "message {i} must have at least one part"
                )));
            }
        }

        let ids = [
            ("contextId", req.operation.context_id()),
            ("taskId", req.operation.task_id()),
        ];
        for (name, id) in ids {
            if id.is_some_and(|id| id.trim().is_empty()) {
                return Err(A2AError::InvalidParams(format!("{name} cannot be empty")));
            }
        }

        Ok(())
    }

    /// Check the agent kept its result contract
    fn validate_response(task: &TaskResult) -> Result<(), A2AError> {
        if task.id.is_empty() {
            return Err(A2AError::Internal("Task ID cannot be empty".into()));
        }

        if task.context_id.is_empty() {
            return Err(A2AError::Internal("Context ID cannot be empty".into()));
        }

        if task.history.last().map(|m| m.role) != Some(Role::Agent) {
            return Err(A2AError::Internal(
                "Task history must end with the agent reply".into(),
            ));
        }

        Ok(())
    }
}

impl<S> Service<A2ARequest> for A2AValidationService<S>
where
    S: Service<A2ARequest, Response = TaskResult, Error = A2AError> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = TaskResult;
    type Error = A2AError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: A2ARequest) -> Self::Future {
        if let Err(e) = Self::validate_request(&req) {
            warn!(id = %req.id, error = %e, "Rejected request");
            return Box::pin(async move { Err(e) });
        }

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let task = inner.call(req).await?;
            Self::validate_response(&task)?;
            Ok(task)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::protocol::{
        message::Message,
        operation::A2AOperation,
        task::{TaskState, TaskStatus},
    };

    use super::*;

    fn execute(messages: Vec<Message>, context_id: Option<&str>) -> A2ARequest {
        A2ARequest::new(
            json!(1),
            A2AOperation::Execute {
                messages,
                context_id: context_id.map(str::to_string),
                task_id: None,
            },
        )
    }

    #[test]
    fn test_validate_send_message() {
        let request = A2ARequest::new(
            json!(1),
            A2AOperation::SendMessage {
                message: Message::user("Hello"),
                configuration: None,
            },
        );

        assert!(A2AValidationService::<()>::validate_request(&request).is_ok());
    }

    #[test]
    fn test_validate_empty_messages() {
        let err = A2AValidationService::<()>::validate_request(&execute(vec![], None)).unwrap_err();
        assert!(matches!(err, A2AError::InvalidParams(_)));
    }

    #[test]
    fn test_validate_message_without_parts() {
        let mut message = Message::user("Test");
        message.parts.clear();

        let err =
            A2AValidationService::<()>::validate_request(&execute(vec![message], None)).unwrap_err();
        assert!(matches!(err, A2AError::InvalidParams(_)));
    }

    #[test]
    fn test_validate_blank_context_id() {
        let request = execute(vec![Message::user("Test")], Some(" "));
        assert!(A2AValidationService::<()>::validate_request(&request).is_err());

        let request = execute(vec![Message::user("Test")], Some("ctx"));
        assert!(A2AValidationService::<()>::validate_request(&request).is_ok());
    }

    #[test]
    fn test_validate_blank_ids_on_send_message() {
        let send = |message: Message| {
            A2ARequest::new(
                json!(1),
                A2AOperation::SendMessage {
                    message,
                    configuration: None,
                },
            )
        };

        let mut message = Message::user("rust developer");
        message.context_id = Some(String::new());
        let err = A2AValidationService::<()>::validate_request(&send(message)).unwrap_err();
        assert!(matches!(err, A2AError::InvalidParams(ref d) if d.contains("contextId")));

        let mut message = Message::user("rust developer");
        message.task_id = Some("  ".into());
        let err = A2AValidationService::<()>::validate_request(&send(message)).unwrap_err();
        assert!(matches!(err, A2AError::InvalidParams(ref d) if d.contains("taskId")));
    }

    #[test]
    fn test_validate_task_response() {
        let status = TaskStatus::new(TaskState::Completed);
        let task = TaskResult::new("task-123", "ctx-1", status)
            .with_history(vec![Message::user("Test"), Message::agent("Found 0 job(s)")]);

        assert!(A2AValidationService::<()>::validate_response(&task).is_ok());

        let bare = TaskResult::new("task-123", "ctx-1", TaskStatus::new(TaskState::Completed));
        assert!(matches!(
            A2AValidationService::<()>::validate_response(&bare),
            Err(A2AError::Internal(_))
        ));
    }
}
