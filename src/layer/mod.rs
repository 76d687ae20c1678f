//! Tower Layer implementations for the agent service

pub mod validation;

pub use validation::{A2AValidationLayer, A2AValidationService};
