//! Route handlers

use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::{json, Value};
use tower::{ServiceBuilder, ServiceExt};
use tracing::{error, info, warn};

use crate::{
    layer::A2AValidationLayer,
    protocol::error::{A2AError, ErrorCode},
    service::{A2ARequest, AgentService},
};

use super::{reply::RpcReply, state::AppState};

/// `POST /a2a/jobseeker`
///
/// Every failure, including an unparsable body, is answered with a JSON-RPC
/// error envelope.
pub async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> RpcReply {
    let request = match state.codec.decode_request(&body) {
        Ok(request) => request,
        Err(rejection) => return error_reply(&state, rejection.id, &rejection.error),
    };

    let operation = match request.operation() {
        Ok(operation) => operation,
        Err(e) => return error_reply(&state, request.id, &e),
    };

    info!(id = %request.id, method = %request.method, "Handling request");

    let service = ServiceBuilder::new()
        .layer(A2AValidationLayer::new())
        .service(AgentService::new(state.agent.clone()));

    let task = match service
        .oneshot(A2ARequest::new(request.id.clone(), operation))
        .await
    {
        Ok(task) => task,
        Err(e) => return error_reply(&state, request.id, &e),
    };

    match state.codec.encode_result(request.id.clone(), &task) {
        Ok(body) => RpcReply::ok(body),
        Err(e) => error_reply(&state, request.id, &e),
    }
}

fn error_reply(state: &AppState, id: Value, e: &A2AError) -> RpcReply {
    if e.code() == ErrorCode::InternalError {
        error!(id = %id, error = %e, "Request failed");
    } else {
        warn!(id = %id, error = %e, "Request rejected");
    }
    RpcReply::error(state.codec.encode_error(id, e))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "agent": "jobseeker"}))
}

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Job seeker agent is running. POST JSON-RPC 2.0 requests to /a2a/jobseeker."
    }))
}
