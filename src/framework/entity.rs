//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must satisfy to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the identifier, the
//! create and update payloads, the runtime context and the error type, and provides the
//! hooks the actor calls while serving requests.
//!
//! # Architecture Note
//! Associated types keep every request type-safe: a `User` store only accepts the payloads
//! declared for `User`, and the compiler rejects anything else.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Context
/// The `Context` type is injected into the hooks when the actor starts running. This allows
/// "late binding" of collaborators (a clock, other clients) that are created after the actor
/// itself, and lets tests swap them for deterministic ones.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly issued ID and the create payload.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Called when an update request targets this entity.
    fn on_update(&mut self, update: Self::Update, ctx: &Self::Context) -> Result<(), Self::Error>;
}
