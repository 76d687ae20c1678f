//! Canonical job record and provider schema normalization

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job posting after normalization
///
/// Only `job_id` is always present (possibly empty); everything else is whatever the
/// provider supplied, or `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    pub title: Option<String>,
    pub employer_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub description: String,
    pub apply_link: Option<String>,
}

/// Candidate source keys per canonical field, tried in order
///
/// The first key holding a non-null, non-empty value wins. Add keys here to
/// support another provider schema.
pub mod fields {
    pub const JOB_ID: &[&str] = &["job_id", "id", "jobId"];
    pub const TITLE: &[&str] = &["title", "job_title", "position", "jobTitle"];
    pub const EMPLOYER_NAME: &[&str] = &["employer_name", "company_name", "company"];
    pub const CITY: &[&str] = &["job_city", "city", "location"];
    pub const COUNTRY: &[&str] = &["job_country", "country"];
    pub const DESCRIPTION: &[&str] = &["description", "job_description", "job_purpose"];
    pub const APPLY_LINK: &[&str] = &["url", "job_apply_link", "apply_link", "apply_url"];
}

impl Job {
    /// Normalize one raw provider record
    ///
    /// Never fails: a record that is not an object, or lacks every candidate key,
    /// yields empty/`None` fields.
    pub fn normalize(raw: &Value) -> Self {
        Self {
            job_id: first_present(raw, fields::JOB_ID).unwrap_or_default(),
            title: first_present(raw, fields::TITLE),
            employer_name: first_present(raw, fields::EMPLOYER_NAME),
            city: first_present(raw, fields::CITY),
            country: first_present(raw, fields::COUNTRY),
            description: first_present(raw, fields::DESCRIPTION).unwrap_or_default(),
            apply_link: first_present(raw, fields::APPLY_LINK),
        }
    }
}

/// First candidate key whose value is a non-empty string, number or bool
fn first_present(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_normalize_jsearch_schema() {
        let raw = json!({
            "job_id": "abc",
            "job_title": "Rust Engineer",
            "employer_name": "Ferris Inc",
            "job_city": "Berlin",
            "job_country": "DE",
            "job_description": "Write Rust",
            "job_apply_link": "https://apply.example.com/abc"
        });

        let job = Job::normalize(&raw);
        assert_eq!(job.job_id, "abc");
        assert_eq!(job.title.as_deref(), Some("Rust Engineer"));
        assert_eq!(job.employer_name.as_deref(), Some("Ferris Inc"));
        assert_eq!(job.city.as_deref(), Some("Berlin"));
        assert_eq!(job.country.as_deref(), Some("DE"));
        assert_eq!(job.description, "Write Rust");
        assert_eq!(job.apply_link.as_deref(), Some("https://apply.example.com/abc"));
    }

    #[test]
    fn test_normalize_alternate_schema() {
        let raw = json!({
            "id": 42,
            "position": "Data Analyst",
            "company": "Numbers Co",
            "location": "Remote",
            "job_purpose": "Analyze things",
            "apply_url": "https://numbers.example.com/42"
        });

        let job = Job::normalize(&raw);
        assert_eq!(job.job_id, "42");
        assert_eq!(job.title.as_deref(), Some("Data Analyst"));
        assert_eq!(job.employer_name.as_deref(), Some("Numbers Co"));
        assert_eq!(job.city.as_deref(), Some("Remote"));
        assert_eq!(job.country, None);
        assert_eq!(job.description, "Analyze things");
        assert_eq!(job.apply_link.as_deref(), Some("https://numbers.example.com/42"));
    }

    #[test]
    fn test_first_non_null_candidate_wins() {
        let raw = json!({"title": null, "job_title": "", "position": "Backend Dev"});
        assert_eq!(Job::normalize(&raw).title.as_deref(), Some("Backend Dev"));

        let raw = json!({"url": "https://a", "job_apply_link": "https://b"});
        assert_eq!(Job::normalize(&raw).apply_link.as_deref(), Some("https://a"));
    }

    #[test]
    fn test_missing_fields_never_fail() {
        let job = Job::normalize(&json!({}));
        assert_eq!(job, Job::default());

        let job = Job::normalize(&json!("not an object"));
        assert_eq!(job.job_id, "");
        assert_eq!(job.description, "");
    }

    #[test]
    fn test_job_serializes_camel_case() {
        let job = Job {
            job_id: "mock-1".into(),
            apply_link: Some("https://jobs.example.com/x-1".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["jobId"], "mock-1");
        assert_eq!(json["applyLink"], "https://jobs.example.com/x-1");
        assert_eq!(json["employerName"], Value::Null);
    }
}
