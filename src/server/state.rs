//! Shared state for the HTTP handlers

use std::sync::Arc;

use crate::{agent::JobSeekerAgent, codec::JsonRpcCodec};

/// State injected into every route handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub agent: Arc<JobSeekerAgent>,
    pub codec: JsonRpcCodec,
}

impl AppState {
    /// Create state around an agent with a non-debug codec
    pub fn new(agent: Arc<JobSeekerAgent>) -> Self {
        Self {
            agent,
            codec: JsonRpcCodec::new(),
        }
    }

    /// Replace the codec
    pub fn with_codec(mut self, codec: JsonRpcCodec) -> Self {
        self.codec = codec;
        self
    }
}
