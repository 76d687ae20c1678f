//! Deterministic offline job provider

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::protocol::error::ProviderError;

use super::JobProvider;

/// Provider used when no API key is configured
///
/// Produces `page_size` synthetic records in the JSearch schema. Output depends only
/// on the arguments.
#[derive(Debug, Clone, Default)]
pub struct MockJobProvider;

impl MockJobProvider {
    /// The synthetic records for a search
    pub fn records(query: &str, location: Option<&str>, page_size: usize) -> Vec<Value> {
        let title = title_case(query);
        (1..=page_size)
            .map(|i| {
                json!({
                    "job_id": format!("mock-{i}"),
                    "job_title": format!("{title} Engineer {i}"),
                    "employer_name": "Acme Corp",
                    "job_city": location.unwrap_or("Remote"),
                    "job_country": "Anywhere",
                    "job_description": format!(
                        "We are seeking a {query} engineer with experience in Python, SQL, Docker, \
                         and CI/CD. Familiarity with AWS or GCP is a plus."
                    ),
                    "job_apply_link": format!("https://jobs.example.com/{query}-{i}"),
                })
            })
            .collect()
    }
}

#[async_trait]
impl JobProvider for MockJobProvider {
    async fn search_jobs(
        &self,
        query: &str,
        location: Option<&str>,
        page_size: usize,
    ) -> Result<Vec<Value>, ProviderError> {
        Ok(Self::records(query, location, page_size))
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
