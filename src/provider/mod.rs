//! Job provider client: retrieval, normalization and skill aggregation

pub mod credentials;
pub mod job;
pub mod jsearch;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

pub use credentials::ProviderCredentials;
pub use job::Job;
pub use jsearch::JSearchProvider;
pub use mock::MockJobProvider;

use crate::{
    config::ProviderConfig,
    protocol::error::ProviderError,
    skills::{top_skills, TOP_SKILLS},
    transport::HttpTransport,
};

/// Source of raw job records
///
/// Implementations return records in whatever schema the provider speaks;
/// [`JobSearchClient`] normalizes them.
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Fetch a single page of raw job records
    async fn search_jobs(
        &self,
        query: &str,
        location: Option<&str>,
        page_size: usize,
    ) -> Result<Vec<Value>, ProviderError>;
}

/// Jobs for a search plus the skills most mentioned across them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSearchResult {
    pub jobs: Vec<Job>,
    pub top_skills: Vec<String>,
}

/// Client combining a provider with normalization and skill aggregation
#[derive(Clone)]
pub struct JobSearchClient {
    provider: Arc<dyn JobProvider>,
}

impl JobSearchClient {
    /// Create a client over any provider
    pub fn new(provider: Arc<dyn JobProvider>) -> Self {
        Self { provider }
    }

    /// Client over the deterministic offline provider
    pub fn mock() -> Self {
        Self::new(Arc::new(MockJobProvider))
    }

    /// Pick the provider from configuration
    ///
    /// Without an API key the mock provider is used instead of failing.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let Some(api_key) = config.api_key.as_deref() else {
            warn!("No job provider API key configured, serving mock jobs");
            return Ok(Self::mock());
        };

        let transport = HttpTransport::new(config.base_url.clone(), config.timeout)?;
        let credentials = ProviderCredentials::new(api_key, config.api_host.clone());
        info!(base_url = %config.base_url, timeout = ?config.timeout, "Using JSearch job provider");

        Ok(Self::new(Arc::new(JSearchProvider::new(transport, credentials))))
    }

    /// Fetch one page of jobs, normalize them and rank the skills they mention
    ///
    /// Provider errors are returned unchanged; nothing is retried.
    pub async fn find_jobs_and_skills(
        &self,
        query: &str,
        location: Option<&str>,
        page_size: usize,
    ) -> Result<JobSearchResult, ProviderError> {
        let records = self.provider.search_jobs(query, location, page_size).await?;
        let jobs: Vec<Job> = records.iter().map(Job::normalize).collect();
        let top_skills = top_skills(jobs.iter().map(|job| job.description.as_str()), TOP_SKILLS);

        Ok(JobSearchResult { jobs, top_skills })
    }
}

impl std::fmt::Debug for JobSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobSearchClient").finish_non_exhaustive()
    }
}
