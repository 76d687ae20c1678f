//! A2A protocol operations dispatched by the agent

use serde::Deserialize;
use serde_json::Value;

use super::{error::A2AError, message::Message};

/// JSON-RPC method for a single-message send
pub const METHOD_SEND_MESSAGE: &str = "message/send";

/// JSON-RPC method for continuing a task with a message list
pub const METHOD_EXECUTE: &str = "execute";

/// Operations accepted on the agent endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum A2AOperation {
    /// Send a single message, starting a new context
    SendMessage {
        /// The message to send
        message: Message,

        /// Opaque client configuration, passed through untouched
        configuration: Option<Value>,
    },

    /// Continue (or start) a task with an ordered list of messages
    Execute {
        /// Conversation so far; the last entry is the current user turn
        messages: Vec<Message>,

        /// Optional context ID for multi-turn conversations
        context_id: Option<String>,

        /// Optional task ID to continue from
        task_id: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct SendMessageParams {
    message: Message,
    #[serde(default)]
    configuration: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ExecuteParams {
    messages: Vec<Message>,
    #[serde(rename = "contextId", default)]
    context_id: Option<String>,
    #[serde(rename = "taskId", default)]
    task_id: Option<String>,
}

impl A2AOperation {
    /// Parse method-specific params
    ///
    /// Unknown methods yield [`A2AError::MethodNotFound`]; shape violations yield
    /// [`A2AError::InvalidParams`] carrying the deserializer's description.
    pub fn from_method(method: &str, params: Value) -> Result<Self, A2AError> {
        match method {
            METHOD_SEND_MESSAGE => {
                let params: SendMessageParams = serde_json::from_value(params)
                    .map_err(|e| A2AError::InvalidParams(e.to_string()))?;
                Ok(A2AOperation::SendMessage {
                    message: params.message,
                    configuration: params.configuration,
                })
            }
            METHOD_EXECUTE => {
                let params: ExecuteParams = serde_json::from_value(params)
                    .map_err(|e| A2AError::InvalidParams(e.to_string()))?;
                Ok(A2AOperation::Execute {
                    messages: params.messages,
                    context_id: params.context_id,
                    task_id: params.task_id,
                })
            }
            other => Err(A2AError::MethodNotFound(other.to_string())),
        }
    }

    /// JSON-RPC method name of this operation
    pub fn method(&self) -> &'static str {
        match self {
            A2AOperation::SendMessage { .. } => METHOD_SEND_MESSAGE,
            A2AOperation::Execute { .. } => METHOD_EXECUTE,
        }
    }

    /// Messages carried by the operation, oldest first
    pub fn messages(&self) -> &[Message] {
        match self {
            A2AOperation::SendMessage { message, .. } => std::slice::from_ref(message),
            A2AOperation::Execute { messages, .. } => messages,
        }
    }

    /// Context the operation continues, if the client named one
    ///
    /// `message/send` carries it on the message, `execute` in its params.
    pub fn context_id(&self) -> Option<&str> {
        match self {
            A2AOperation::SendMessage { message, .. } => message.context_id.as_deref(),
            A2AOperation::Execute { context_id, .. } => context_id.as_deref(),
        }
    }

    /// Task the operation continues, if the client named one
    pub fn task_id(&self) -> Option<&str> {
        match self {
            A2AOperation::SendMessage { message, .. } => message.task_id.as_deref(),
            A2AOperation::Execute { task_id, .. } => task_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn user_message() -> Value {
        json!({"role": "user", "parts": [{"kind": "text", "text": {"message": "rust jobs"}}]})
    }

    #[test]
    fn test_send_message_params() {
        let op = A2AOperation::from_method(
            "message/send",
            json!({"message": user_message(), "configuration": {"blocking": true}}),
        )
        .unwrap();

        assert_eq!(op.method(), "message/send");
        assert_eq!(op.messages().len(), 1);
        assert!(matches!(
            op,
            A2AOperation::SendMessage { configuration: Some(_), .. }
        ));
    }

    #[test]
    fn test_send_message_requires_message() {
        let err = A2AOperation::from_method("message/send", json!({})).unwrap_err();
        match err {
            A2AError::InvalidParams(details) => assert!(details.contains("message")),
            other => panic!("Expected InvalidParams, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_params() {
        let op = A2AOperation::from_method(
            "execute",
            json!({"messages": [user_message(), user_message()], "contextId": "ctx-1"}),
        )
        .unwrap();

        match op {
            A2AOperation::Execute {
                messages,
                context_id,
                task_id,
            } => {
                assert_eq!(messages.len(), 2);
                assert_eq!(context_id.as_deref(), Some("ctx-1"));
                assert!(task_id.is_none());
            }
            _ => panic!("Expected Execute"),
        }
    }

    #[test]
    fn test_execute_requires_messages() {
        let err = A2AOperation::from_method("execute", json!({"contextId": "c"})).unwrap_err();
        assert!(matches!(err, A2AError::InvalidParams(_)));
    }

    #[test]
    fn test_unknown_method() {
        let err = A2AOperation::from_method("tasks/cancel", json!({})).unwrap_err();
        assert!(matches!(err, A2AError::MethodNotFound(m) if m == "tasks/cancel"));
    }
}
