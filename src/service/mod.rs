//! Tower Service implementations

pub mod core;
pub mod request;

pub use core::AgentService;
pub use request::A2ARequest;
