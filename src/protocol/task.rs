//! A2A task result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{message::Message, Artifact};

/// Result of processing one task
///
/// A task result carries the terminal (or input-required) status, the artifacts produced
/// by the agent and the full message history of the conversation at response time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResult {
    /// Unique identifier for the task
    pub id: String,

    /// Conversation the task belongs to
    #[serde(rename = "contextId")]
    pub context_id: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Outputs produced by the task
    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    /// Every message exchanged under `context_id`, in arrival order
    #[serde(default)]
    pub history: Vec<Message>,
}

impl TaskResult {
    /// Create a new task result
    pub fn new(id: impl Into<String>, context_id: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            context_id: context_id.into(),
            status,
            artifacts: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Check if the task is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.state.is_terminal()
    }

    /// Append an artifact
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Replace the history snapshot
    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    /// Find an artifact by name
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
    }
}

/// Status of a task at response time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// Lifecycle state
    pub state: TaskState,

    /// When the status was produced
    pub timestamp: DateTime<Utc>,

    /// Agent message describing the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl TaskStatus {
    /// Create a status stamped with the current time
    pub fn new(state: TaskState) -> Self {
        Self {
            state,
            timestamp: Utc::now(),
            message: None,
        }
    }

    /// Attach the agent message
    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }
}

/// Task lifecycle states produced by this agent
///
/// `input-required` is non-terminal (the agent expects a follow-up turn);
/// `completed` and `failed` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task requires additional input from the client
    InputRequired,

    /// Task completed successfully
    Completed,

    /// Task failed with an error
    Failed,
}

impl TaskState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Failed)
    }

    /// `input-required` when the search returned jobs, `completed` otherwise
    pub fn for_job_count(count: usize) -> Self {
        if count > 0 {
            TaskState::InputRequired
        } else {
            TaskState::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::message::Message;

    use super::*;

    #[test]
    fn test_task_state() {
        assert!(TaskState::Completed.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(!TaskState::InputRequired.is_terminal());
    }

    #[test]
    fn test_state_for_job_count() {
        assert_eq!(TaskState::for_job_count(0), TaskState::Completed);
        assert_eq!(TaskState::for_job_count(1), TaskState::InputRequired);
        assert_eq!(TaskState::for_job_count(8), TaskState::InputRequired);
    }

    #[test]
    fn test_task_result_serialization() {
        let status = TaskStatus::new(TaskState::InputRequired).with_message(Message::agent("Found"));
        let task = TaskResult::new("task-123", "ctx-1", status)
            .with_artifact(Artifact::text("recommendation", "Learn Rust"))
            .with_history(vec![Message::user("hi"), Message::agent("Found")]);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "task-123");
        assert_eq!(json["contextId"], "ctx-1");
        assert_eq!(json["status"]["state"], "input-required");
        assert!(json["status"]["timestamp"].is_string());
        assert_eq!(json["history"].as_array().unwrap().len(), 2);

        let deserialized: TaskResult = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, task);
        assert!(!deserialized.is_terminal());
    }

    #[test]
    fn test_artifact_lookup() {
        let task = TaskResult::new("t", "c", TaskStatus::new(TaskState::Completed))
            .with_artifact(Artifact::text("recommendation", "x"));

        assert!(task.artifact("recommendation").is_some());
        assert!(task.artifact("jobs").is_none());
    }
}
