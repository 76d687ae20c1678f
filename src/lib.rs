//! # Jobseeker A2A
//!
//! A job search agent speaking the Agent2Agent (A2A) protocol over JSON-RPC 2.0.
//!
//! A user turn (free text, or a structured data part carrying `keywords`,
//! `location` and `userSkills`) is turned into a job search. The agent fetches a
//! page of jobs from the provider, ranks the skills the job descriptions mention
//! most, recommends the ones the user is missing, and answers with a task
//! carrying `jobs`, `skills` and `recommendation` artifacts plus the
//! conversation history of its context.
//!
//! Requests flow through Tower: the JSON-RPC codec unwraps the envelope, the
//! [`layer::A2AValidationLayer`] checks the operation, and the
//! [`service::AgentService`] hands it to the [`agent::JobSeekerAgent`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use jobseeker_a2a::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let agent = JobSeekerAgent::new(
//!         Arc::new(HeuristicExtractor::new()),
//!         JobSearchClient::mock(),
//!         Arc::new(HistoryStore::new()),
//!     );
//!
//!     let task = agent
//!         .process_messages(vec![Message::user("rust developer in Berlin")], None, None)
//!         .await?;
//!     println!("{:?}", task.status.state);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod codec;
pub mod config;
pub mod extractor;
pub mod history;
pub mod layer;
pub mod protocol;
pub mod provider;
pub mod recommend;
pub mod server;
pub mod service;
pub mod skills;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        agent::JobSeekerAgent,
        config::{AgentConfig, ProviderConfig},
        extractor::{HeuristicExtractor, KeywordExtractor},
        history::HistoryStore,
        protocol::error::A2AError,
        protocol::{A2AOperation, Artifact, Message, Part, Role, TaskResult, TaskState, TaskStatus},
        provider::{Job, JobSearchClient},
        server::{build_router, AppState},
    };
}
