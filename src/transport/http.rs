//! HTTP transport implementation for the job provider

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::protocol::error::ProviderError;

use super::{Transport, TransportRequest, TransportResponse};

/// HTTP transport implementation using reqwest
///
/// Every request carries the client's timeout; an elapsed timeout surfaces as
/// [`ProviderError::Timeout`].
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Arguments
    ///
    /// * `base_url` - The provider's search URL (e.g., "<https://jsearch.p.rapidapi.com/search>")
    /// * `timeout` - Upper bound for a whole request, including the body read
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn build_url(&self, request: &TransportRequest) -> Url {
        let mut url = self.base_url.clone();
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ProviderError> {
        let url = self.build_url(&request);

        if request.method != "GET" {
            return Err(ProviderError::Transport(format!(
                "Unsupported HTTP method: {}",
                request.method
            )));
        }

        let mut req_builder = self.client.get(url);
        for (key, value) in request.headers {
            req_builder = req_builder.header(key, value);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse::new(status).body(body))
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}
