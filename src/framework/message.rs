//! # Generic Messages
//!
//! Request types exchanged between [`ResourceClient`](crate::framework::ResourceClient) and
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the store contract:
///
/// - **Create**: issue an ID, build the entity, append it, answer with the stored entity.
/// - **Get**: fetch one entity by ID.
/// - **List**: snapshot of every entity in insertion order.
/// - **Update**: apply an update payload; answers `None` when the ID is unknown.
/// - **Delete**: remove by ID; answers whether anything was removed.
/// - **Seed**: append pre-built entities, skipping IDs that are already present.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Seed {
        items: Vec<T>,
        respond_to: Response<usize>,
    },
}
