//! Error types for the agent and its provider boundary

use std::error::Error as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON-RPC 2.0 error codes used by the agent envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ErrorCode {
    /// Body was not valid JSON
    ParseError,

    /// Not a JSON-RPC 2.0 request object
    InvalidRequest,

    /// Method is not dispatched by this agent
    MethodNotFound,

    /// Params do not match the method's shape
    InvalidParams,

    /// Anything else, including provider failures
    InternalError,
}

impl ErrorCode {
    /// Numeric JSON-RPC code
    pub fn code(&self) -> i64 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
        }
    }

    /// Standard short message for the code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::InvalidRequest => "Invalid Request",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// HTTP status accompanying the error: 400 for client-shape errors, 500 otherwise
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InternalError => 500,
            _ => 400,
        }
    }
}

impl From<ErrorCode> for i64 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<i64> for ErrorCode {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -32700 => Ok(ErrorCode::ParseError),
            -32600 => Ok(ErrorCode::InvalidRequest),
            -32601 => Ok(ErrorCode::MethodNotFound),
            -32602 => Ok(ErrorCode::InvalidParams),
            -32603 => Ok(ErrorCode::InternalError),
            other => Err(format!("unknown JSON-RPC error code {other}")),
        }
    }
}

/// Main error type for agent operations
#[derive(Debug, Error)]
pub enum A2AError {
    /// Request body is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Envelope is not a JSON-RPC 2.0 request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Method is not one this agent dispatches
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Params violate the method's shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Job provider failure
    #[error("Job provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Internal(String),
}

impl A2AError {
    /// JSON-RPC classification of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            A2AError::Parse(_) => ErrorCode::ParseError,
            A2AError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            A2AError::MethodNotFound(_) => ErrorCode::MethodNotFound,
            A2AError::InvalidParams(_) => ErrorCode::InvalidParams,
            A2AError::Provider(_) | A2AError::Serialization(_) | A2AError::Internal(_) => {
                ErrorCode::InternalError
            }
        }
    }

    /// Human readable detail without the variant prefix
    pub fn details(&self) -> String {
        match self {
            A2AError::Parse(msg)
            | A2AError::InvalidRequest(msg)
            | A2AError::MethodNotFound(msg)
            | A2AError::InvalidParams(msg)
            | A2AError::Internal(msg) => msg.clone(),
            A2AError::Provider(err) => err.to_string(),
            A2AError::Serialization(err) => err.to_string(),
        }
    }

    /// Display strings of this error and every source below it
    pub fn chain(&self) -> Vec<String> {
        let mut chain = vec![self.to_string()];
        let mut source = self.source();
        while let Some(err) = source {
            chain.push(err.to_string());
            source = err.source();
        }
        chain
    }
}

/// Result type alias for agent operations
pub type A2AResult<T> = Result<T, A2AError>;

/// Failure at the job provider boundary
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level failure (connect, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider did not answer within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Provider answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider body was not the expected JSON
    #[error("Invalid provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Provider base URL could not be used
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_connect() {
            ProviderError::Transport(format!("Connection error: {}", err))
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for ProviderError {
    fn from(err: url::ParseError) -> Self {
        ProviderError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::ParseError.code(), -32700);
        assert_eq!(ErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(ErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(ErrorCode::InvalidParams.code(), -32602);
        assert_eq!(ErrorCode::InternalError.code(), -32603);
    }

    #[test]
    fn test_invalid_request_message_is_generic() {
        assert_eq!(ErrorCode::InvalidRequest.message(), "Invalid Request");

        let err = A2AError::InvalidRequest("method must be a string".into());
        assert_eq!(err.code().message(), "Invalid Request");
        assert_eq!(err.details(), "method must be a string");
    }

    #[test]
    fn test_http_status_split() {
        assert_eq!(ErrorCode::InvalidRequest.http_status(), 400);
        assert_eq!(ErrorCode::InvalidParams.http_status(), 400);
        assert_eq!(ErrorCode::MethodNotFound.http_status(), 400);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_provider_errors_are_internal() {
        let err = A2AError::from(ProviderError::Timeout);
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.details(), "Request timeout");

        let err = A2AError::from(ProviderError::Status {
            status: 503,
            body: "unavailable".into(),
        });
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.details().contains("503"));
    }

    #[test]
    fn test_error_chain_includes_source() {
        let err = A2AError::from(ProviderError::Timeout);
        let chain = err.chain();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1], "Request timeout");
    }

    #[test]
    fn test_code_serializes_as_integer() {
        let json = serde_json::to_value(ErrorCode::InvalidParams).unwrap();
        assert_eq!(json, serde_json::json!(-32602));
    }
}
