//! Agent service request type

use serde_json::Value;

use crate::protocol::operation::A2AOperation;

/// A decoded request for the agent service
///
/// Pairs the operation with the JSON-RPC id so the reply can echo it.
#[derive(Debug, Clone)]
pub struct A2ARequest {
    /// JSON-RPC request id
    pub id: Value,

    /// The operation to execute
    pub operation: A2AOperation,
}

impl A2ARequest {
    /// Create a new request
    pub fn new(id: Value, operation: A2AOperation) -> Self {
        Self { id, operation }
    }
}
