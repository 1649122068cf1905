//! # User Actor
//!
//! The record store for managed accounts: a [`ResourceActor<User>`] plus the pieces it needs.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`clock`] - [`Clock`] injected as the actor context to date new records
//! - [`ids`] - [`TimestampIds`], the identifier generator
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run(Arc::new(SystemClock)));
//! let user = client.insert(UserFields::new("Alice", "alice@example.com", UserStatus::Active)).await?;
//! ```

pub mod clock;
pub mod entity;
pub mod error;
pub mod ids;

pub use clock::*;
pub use error::*;
pub use ids::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let ids = TimestampIds::new();
    let next_user_id = move || ids.next_id();

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_user_id);
    let client = UserClient::new(generic_client);

    (actor, client)
}
