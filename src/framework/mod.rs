//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for a type-safe store that lives in its own
//! Tokio task and is reached only through message passing.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns an ordered store of entities
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests
//! - [`ActorClient`] - Trait that resource-specific clients implement to inherit reads and deletes
//! - [`FrameworkError`] - Plumbing errors between clients and actors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
