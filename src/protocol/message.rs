//! A2A message types

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A message in the A2A protocol
///
/// Messages are one turn of a conversation. Each message has a role (user or agent),
/// one or more parts (text or data), and optional identifiers tying it to a task
/// and a conversation context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Message content parts
    pub parts: Vec<Part>,

    /// Optional message identifier
    #[serde(rename = "messageId", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Optional task identifier (for associating message with a task)
    #[serde(rename = "taskId", default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Optional context identifier (for multi-turn conversations)
    #[serde(rename = "contextId", default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Optional metadata for the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

impl Message {
    /// Create a new message with a single text part
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::text(text)],
            message_id: None,
            task_id: None,
            context_id: None,
            metadata: None,
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Create a new message builder
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Add a message part
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// The user utterance carried by the last non-empty text part, if any
    pub fn text(&self) -> Option<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => text.utterance(),
                Part::Data { .. } => None,
            })
            .last()
    }

    /// The mapping carried by the last non-empty data part, if any
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Data { data } if !data.is_empty() => Some(data),
                _ => None,
            })
            .last()
    }
}

/// Builder for constructing Message instances
#[derive(Debug, Default)]
pub struct MessageBuilder {
    role: Option<Role>,
    parts: Vec<Part>,
    message_id: Option<String>,
    task_id: Option<String>,
    context_id: Option<String>,
}

impl MessageBuilder {
    /// Create a new message builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role of the message
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Add a single part to the message
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Set the message ID
    pub fn message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Set the task ID
    pub fn task_id(mut self, id: impl Into<String>) -> Self {
        self.task_id = Some(id.into());
        self
    }

    /// Set the context ID
    pub fn context_id(mut self, id: impl Into<String>) -> Self {
        self.context_id = Some(id.into());
        self
    }

    /// Build the message
    ///
    /// # Panics
    ///
    /// Panics if role is not set or if parts are empty
    pub fn build(self) -> Message {
        let role = self.role.expect("Message role is required");
        assert!(
            !self.parts.is_empty(),
            "Message must have at least one part"
        );

        Message {
            role,
            parts: self.parts,
            message_id: self.message_id,
            task_id: self.task_id,
            context_id: self.context_id,
            metadata: None,
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from the agent
    Agent,
}

/// Structured payload of a text part
///
/// The human readable string lives under `message`; requests may use `query`
/// instead. Unknown keys are preserved.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TextContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextContent {
    /// Wrap a plain string as `{"message": ...}`
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            ..Default::default()
        }
    }

    /// The utterance, preferring `query` over `message`; empty strings count as absent
    pub fn utterance(&self) -> Option<&str> {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
    }
}

impl<'de> Deserialize<'de> for TextContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Structured {
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            query: Option<String>,
            #[serde(flatten)]
            extra: Map<String, Value>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Structured(Structured),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Plain(text) => TextContent::message(text),
            Raw::Structured(s) => TextContent {
                message: s.message,
                query: s.query,
                extra: s.extra,
            },
        })
    }
}

/// A part of a message, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    /// Human readable content
    Text {
        /// The structured text payload
        text: TextContent,
    },

    /// Structured data, e.g. `{keywords, location, userSkills}` or `{jobs}`
    Data {
        /// The structured data
        data: Map<String, Value>,
    },
}

impl Part {
    /// Create a text part carrying `{"message": text}`
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent::message(text),
        }
    }

    /// Create a data part from a JSON mapping
    pub fn data(data: Map<String, Value>) -> Self {
        Self::Data { data }
    }
}
