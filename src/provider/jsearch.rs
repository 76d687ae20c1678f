//! JSearch (RapidAPI) job provider

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::{
    protocol::error::ProviderError,
    transport::{Transport, TransportRequest},
};

use super::{credentials::ProviderCredentials, JobProvider};

/// Job provider backed by the JSearch search endpoint
///
/// Issues a single-page GET against the transport's base URL and returns the raw
/// records found under `data` (or `jobs`).
#[derive(Debug, Clone)]
pub struct JSearchProvider<T> {
    transport: T,
    credentials: ProviderCredentials,
}

impl<T: Transport> JSearchProvider<T> {
    /// Create a new provider over `transport`
    pub fn new(transport: T, credentials: ProviderCredentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    fn build_request(&self, query: &str, location: Option<&str>, page_size: usize) -> TransportRequest {
        let mut request = TransportRequest::new("GET")
            .query("query", query)
            .query("num_pages", "1")
            .query("page", "1")
            .query("size", page_size.to_string());

        if let Some(location) = location {
            request = request.query("location", location);
        }

        for (header, value) in self.credentials.to_headers() {
            request = request.header(header, value);
        }

        request.header("Accept", "application/json")
    }
}

/// Records under `data`, else `jobs`, else none
fn extract_records(body: Value) -> Vec<Value> {
    let Value::Object(mut obj) = body else {
        return Vec::new();
    };

    ["data", "jobs"]
        .iter()
        .find_map(|key| match obj.remove(*key) {
            Some(Value::Array(records)) if !records.is_empty() => Some(records),
            _ => None,
        })
        .unwrap_or_default()
}

#[async_trait]
impl<T: Transport> JobProvider for JSearchProvider<T> {
    async fn search_jobs(
        &self,
        query: &str,
        location: Option<&str>,
        page_size: usize,
    ) -> Result<Vec<Value>, ProviderError> {
        let request = self.build_request(query, location, page_size);
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(ProviderError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let body: Value = serde_json::from_slice(&response.body)?;
        let records = extract_records(body);
        debug!(count = records.len(), base_url = %self.transport.base_url(), "Provider returned records");

        Ok(records)
    }
}
