//! HTTP surface of the agent

pub mod handlers;
pub mod reply;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use reply::RpcReply;
pub use state::AppState;

/// Path of the JSON-RPC endpoint
pub const RPC_PATH: &str = "/a2a/jobseeker";

/// Build the router with tracing and permissive CORS
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(RPC_PATH, post(handlers::handle_rpc))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
