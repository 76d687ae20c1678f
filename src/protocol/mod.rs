//! Core A2A protocol types and definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub mod error;
pub mod message;
pub mod operation;
pub mod task;

pub use error::A2AError;
pub use message::{Message, Part, Role, TextContent};
pub use operation::A2AOperation;
pub use task::{TaskResult, TaskState, TaskStatus};

/// Artifacts represent task outputs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique identifier of the Artifact
    pub artifact_id: String,

    /// A human readable name for the Artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contents of the Artifact. Must contain at least one part
    pub parts: Vec<Part>,
}

impl Artifact {
    /// Create a named artifact from parts
    pub fn new(name: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            artifact_id: Uuid::now_v7().to_string(),
            name: Some(name.into()),
            parts,
        }
    }

    /// Artifact holding a single data part
    pub fn data(name: impl Into<String>, data: Map<String, Value>) -> Self {
        Self::new(name, vec![Part::data(data)])
    }

    /// Artifact holding a single `{"message": text}` part
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, vec![Part::text(text)])
    }
}
