//! Outbound transport used to reach the job provider

pub mod http;
#[cfg(test)]
pub mod mock;

use std::collections::HashMap;

pub use http::HttpTransport;
use url::Url;

use async_trait::async_trait;
use bytes::Bytes;

use crate::protocol::error::ProviderError;

/// Protocol-agnostic transport request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method; the HTTP transport only issues GET
    pub method: String,

    /// Query string pairs, appended to the base URL in order
    pub query: Vec<(String, String)>,

    /// Headers for the request
    pub headers: HashMap<String, String>,
}

impl TransportRequest {
    /// Create a new transport request
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Look up a query parameter by key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Protocol-agnostic transport response
#[derive(Debug)]
pub struct TransportResponse {
    /// Status code (e.g., HTTP status code)
    pub status: u16,

    /// Response body as bytes
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: Bytes::new(),
        }
    }

    /// Set the response body
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Core transport trait for executing provider requests
///
/// This trait abstracts over the network so the provider client can be exercised
/// without a live HTTP endpoint.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Execute a transport request asynchronously
    ///
    /// # Arguments
    ///
    /// * `request` - The protocol-agnostic request to execute
    ///
    /// # Returns
    ///
    /// A protocol-agnostic response or an error
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ProviderError>;

    /// Get the base URL for this transport
    fn base_url(&self) -> &Url;
}
