//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// A required form field was left empty.
    #[error("User validation error: {0}")]
    Validation(String),

    /// The initial data source could not provide records.
    #[error("User source error: {0}")]
    Source(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
