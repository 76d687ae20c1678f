//! JSON-RPC reply as an HTTP response

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::codec::JsonRpcResponse;

/// A JSON-RPC envelope paired with its HTTP status
#[derive(Debug)]
pub struct RpcReply {
    pub status: StatusCode,
    pub body: JsonRpcResponse,
}

impl RpcReply {
    /// 200 with a result envelope
    pub fn ok(body: JsonRpcResponse) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// Error envelope with the status its code maps to
    pub fn error(body: JsonRpcResponse) -> Self {
        let status = body
            .error
            .as_ref()
            .and_then(|e| StatusCode::from_u16(e.code.http_status()).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self { status, body }
    }
}

impl IntoResponse for RpcReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
