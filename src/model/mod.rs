//! Pure data structures. [`User`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod seed;
pub mod user;

pub use seed::*;
pub use user::*;
