//! JSON-RPC 2.0 codec for the agent endpoint
//!
//! This codec unwraps incoming JSON-RPC 2.0 request envelopes and wraps task results
//! and errors into response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::protocol::{
    error::{A2AError, ErrorCode},
    operation::A2AOperation,
    task::TaskResult,
};

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request envelope, after envelope validation
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcRequest {
    /// Echoed back in the response; may be null
    pub id: Value,

    pub method: String,

    /// Method-specific params, `null` when absent
    pub params: Value,
}

impl JsonRpcRequest {
    /// Parse params into the operation named by `method`
    pub fn operation(&self) -> Result<A2AOperation, A2AError> {
        A2AOperation::from_method(&self.method, self.params.clone())
    }
}

/// JSON-RPC 2.0 response envelope
///
/// Exactly one of `result` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,

    #[serde(default)]
    pub id: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

/// A request that failed before it reached the agent
#[derive(Debug)]
pub struct Rejection {
    /// Best-effort id of the offending request, null when unknown
    pub id: Value,

    pub error: A2AError,
}

impl Rejection {
    fn new(id: Value, error: A2AError) -> Self {
        Self { id, error }
    }
}

/// JSON-RPC 2.0 codec for the agent endpoint
#[derive(Debug, Clone, Default)]
pub struct JsonRpcCodec {
    /// Include the error source chain in internal error envelopes
    debug: bool,
}

impl JsonRpcCodec {
    /// Create a new JSON-RPC codec
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable `data.trace` on internal errors
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate and unwrap a request envelope
    ///
    /// The body must be a JSON object with `jsonrpc == "2.0"`, an `id` key holding a
    /// scalar (null allowed) and a string `method`.
    pub fn decode_request(&self, body: &[u8]) -> Result<JsonRpcRequest, Rejection> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Rejection::new(Value::Null, A2AError::Parse(e.to_string())))?;

        let Value::Object(mut obj) = value else {
            return Err(Rejection::new(
                Value::Null,
                A2AError::InvalidRequest("request must be a JSON object".into()),
            ));
        };

        let id = match obj.remove("id") {
            Some(id) if is_scalar(&id) => id,
            Some(_) => {
                return Err(Rejection::new(
                    Value::Null,
                    A2AError::InvalidRequest("id must be a string, number or null".into()),
                ))
            }
            None => {
                return Err(Rejection::new(
                    Value::Null,
                    A2AError::InvalidRequest("id is required".into()),
                ))
            }
        };

        if obj.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
            return Err(Rejection::new(
                id,
                A2AError::InvalidRequest("jsonrpc must be '2.0'".into()),
            ));
        }

        let method = match obj.remove("method") {
            Some(Value::String(method)) => method,
            _ => {
                return Err(Rejection::new(
                    id,
                    A2AError::InvalidRequest("method must be a string".into()),
                ))
            }
        };

        let params = obj.remove("params").unwrap_or(Value::Null);

        Ok(JsonRpcRequest { id, method, params })
    }

    /// Wrap a task result in a success envelope
    pub fn encode_result(&self, id: Value, result: &TaskResult) -> Result<JsonRpcResponse, A2AError> {
        Ok(JsonRpcResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(serde_json::to_value(result)?),
            error: None,
        })
    }

    /// Wrap an error in an error envelope
    ///
    /// `data.details` always carries the error detail; `data.trace` is added for
    /// internal errors only when the codec is in debug mode.
    pub fn encode_error(&self, id: Value, error: &A2AError) -> JsonRpcResponse {
        let code = error.code();

        let mut data = Map::new();
        data.insert("details".into(), json!(error.details()));
        if self.debug && code == ErrorCode::InternalError {
            data.insert("trace".into(), json!(error.chain()));
        }

        JsonRpcResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: code.message().to_string(),
                data: Value::Object(data),
            }),
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
