use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use crate::{
    protocol::error::ProviderError,
    transport::{Transport, TransportRequest, TransportResponse},
};

type Handler = dyn Fn(TransportRequest) -> Result<TransportResponse, ProviderError> + Send + Sync;

/// Mock transport for internal testing
///
/// This transport is used for unit tests to mock provider responses without
/// requiring a real network connection or a mock HTTP server. Every executed
/// request is recorded for later inspection.
#[derive(Clone)]
pub(crate) struct MockTransport {
    handler: Arc<Handler>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
    base_url: Url,
}

impl MockTransport {
    /// Create a new mock transport with a custom request handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(TransportRequest) -> Result<TransportResponse, ProviderError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            requests: Arc::new(Mutex::new(Vec::new())),
            base_url: Url::parse("mock://provider/search").unwrap(),
        }
    }

    /// Create a mock transport that always answers with `status` and `body`
    pub fn respond(status: u16, body: &'static str) -> Self {
        Self::new(move |_| Ok(TransportResponse::new(status).body(body.into())))
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport").finish()
    }
}
