//! # Framework Errors
//!
//! Plumbing failures between a [`ResourceClient`](crate::framework::ResourceClient) and its
//! actor. Lookups that miss are not errors here: they are reported as `None` or `false`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
