//! Job seeker agent: turns a user turn into jobs, skills and a recommendation

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    extractor::KeywordExtractor,
    history::HistoryStore,
    protocol::{
        error::{A2AError, A2AResult},
        message::{Message, Part, Role},
        operation::A2AOperation,
        task::{TaskResult, TaskState, TaskStatus},
        Artifact,
    },
    provider::JobSearchClient,
    recommend::build_recommendation,
};

/// Jobs requested from the provider per turn
pub const PAGE_SIZE: usize = 8;

/// Query used when the user turn yields no keywords
pub const DEFAULT_QUERY: &str = "software engineer";

/// Top skills quoted in the reply summary
const SUMMARY_SKILLS: usize = 6;

/// Search parameters derived from the current user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIntent {
    pub query: String,
    pub location: Option<String>,
    pub user_skills: Vec<String>,
}

/// The job seeker agent
///
/// Owns the keyword extractor, the job search client and the conversation
/// history. One call to [`JobSeekerAgent::process_messages`] produces one task
/// and appends exactly two messages (the user turn and the agent reply) to the
/// context's history.
#[derive(Clone)]
pub struct JobSeekerAgent {
    extractor: Arc<dyn KeywordExtractor>,
    jobs: JobSearchClient,
    history: Arc<HistoryStore>,
}

impl JobSeekerAgent {
    /// Create a new agent
    pub fn new(
        extractor: Arc<dyn KeywordExtractor>,
        jobs: JobSearchClient,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            extractor,
            jobs,
            history,
        }
    }

    /// The conversation history this agent appends to
    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    /// Run an envelope operation
    ///
    /// `message/send` takes its context and task IDs from the message itself;
    /// `execute` takes them from its params.
    pub async fn handle(&self, operation: A2AOperation) -> A2AResult<TaskResult> {
        match operation {
            A2AOperation::SendMessage {
                message,
                configuration,
            } => {
                if let Some(configuration) = configuration {
                    debug!(%configuration, "Ignoring send configuration");
                }
                let context_id = message.context_id.clone();
                let task_id = message.task_id.clone();
                self.process_messages(vec![message], context_id, task_id)
                    .await
            }
            A2AOperation::Execute {
                messages,
                context_id,
                task_id,
            } => self.process_messages(messages, context_id, task_id).await,
        }
    }

    /// Answer the last message of `messages` within a context
    ///
    /// Missing IDs are generated. The context's history stays locked from the
    /// user append until the agent reply is appended, so concurrent turns on the
    /// same context are answered one after the other. Provider failures are
    /// returned as errors and leave only the user turn in history.
    #[instrument(skip(self, messages), fields(messages = messages.len()))]
    pub async fn process_messages(
        &self,
        messages: Vec<Message>,
        context_id: Option<String>,
        task_id: Option<String>,
    ) -> A2AResult<TaskResult> {
        if context_id.as_deref().is_some_and(|id| id.trim().is_empty())
            || task_id.as_deref().is_some_and(|id| id.trim().is_empty())
        {
            return Err(A2AError::InvalidParams(
                "contextId and taskId cannot be empty".into(),
            ));
        }

        let context_id = context_id.unwrap_or_else(new_id);
        let task_id = task_id.unwrap_or_else(new_id);

        let Some(current) = messages.into_iter().last() else {
            return Err(A2AError::InvalidParams(
                "At least one message is required".into(),
            ));
        };

        let intent = self.intent(&current);
        let mut history = self.history.lock(&context_id).await;
        history.push(current);
        debug!(context_id = %context_id, len = history.len(), "Appended user message");

        let result = self
            .jobs
            .find_jobs_and_skills(&intent.query, intent.location.as_deref(), PAGE_SIZE)
            .await?;
        info!(
            query = %intent.query,
            location = ?intent.location,
            jobs = result.jobs.len(),
            "Job search finished"
        );

        let reply = Message::builder()
            .role(Role::Agent)
            .part(Part::text(summary(
                &intent.query,
                intent.location.as_deref(),
                result.jobs.len(),
                &result.top_skills,
            )))
            .message_id(new_id())
            .task_id(task_id.clone())
            .context_id(context_id.clone())
            .build();
        history.push(reply.clone());

        let mut jobs = Map::new();
        jobs.insert("jobs".into(), serde_json::to_value(&result.jobs)?);
        let mut skills = Map::new();
        skills.insert("top_skills".into(), serde_json::to_value(&result.top_skills)?);
        let recommendation = build_recommendation(&result.top_skills, &intent.user_skills);

        let status = TaskStatus::new(TaskState::for_job_count(result.jobs.len())).with_message(reply);

        Ok(TaskResult::new(task_id, context_id, status)
            .with_artifact(Artifact::data("jobs", jobs))
            .with_artifact(Artifact::data("skills", skills))
            .with_artifact(Artifact::text("recommendation", recommendation))
            .with_history(history.snapshot()))
    }

    /// Derive the search from the user turn
    ///
    /// A data part is authoritative (`keywords`, else `query`, else the text);
    /// otherwise the text goes through the keyword extractor. When neither
    /// yields a query the raw text is searched, and only empty text falls back
    /// to [`DEFAULT_QUERY`].
    pub fn intent(&self, message: &Message) -> SearchIntent {
        let text = message.text().unwrap_or_default().trim();

        let (query, location, user_skills) = match message.data() {
            Some(data) => (
                keywords(data)
                    .or_else(|| non_empty_str(data.get("query")))
                    .unwrap_or_else(|| text.to_string()),
                non_empty_str(data.get("location")),
                user_skills(data),
            ),
            None => {
                let extracted = self.extractor.extract(text, true);
                (extracted.query(), extracted.location, Vec::new())
            }
        };

        let query = [query.trim(), text]
            .into_iter()
            .find(|q| !q.is_empty())
            .unwrap_or(DEFAULT_QUERY)
            .to_string();

        SearchIntent {
            query,
            location,
            user_skills,
        }
    }
}

impl std::fmt::Debug for JobSeekerAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobSeekerAgent")
            .field("jobs", &self.jobs)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

fn new_id() -> String {
    Uuid::now_v7().to_string()
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `keywords` as a string, or a list of strings joined by spaces
fn keywords(data: &Map<String, Value>) -> Option<String> {
    match data.get("keywords")? {
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            (!joined.is_empty()).then_some(joined)
        }
        other => non_empty_str(Some(other)),
    }
}

fn user_skills(data: &Map<String, Value>) -> Vec<String> {
    data.get("userSkills")
        .and_then(Value::as_array)
        .map(|skills| {
            skills
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn summary(query: &str, location: Option<&str>, found: usize, top_skills: &[String]) -> String {
    let mut text = format!("Found {found} job(s) for '{query}'");
    match location {
        Some(location) => text.push_str(&format!(" in {location}.")),
        None => text.push('.'),
    }
    let quoted: Vec<&str> = top_skills
        .iter()
        .take(SUMMARY_SKILLS)
        .map(String::as_str)
        .collect();
    text.push_str(&format!(" Top skills: {}.", quoted.join(", ")));
    text
}
