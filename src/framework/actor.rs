//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns an ordered store of entities
//! and serves every request against it sequentially.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Messages are processed one at a time inside a single Tokio
/// task, so the store needs no `Mutex` or `RwLock`: exclusive ownership gives us safety.
///
/// # Ordering
/// The store is a `Vec` kept in insertion order. Updates happen in place, removals close
/// the gap, and `List` answers with the entities in the order they were added.
///
/// # Identifiers
/// IDs come from the `next_id_fn` supplied at construction. An issued ID that collides
/// with an entity already in the store (for example one that was seeded) is skipped, so
/// the generator must eventually produce a fresh value.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<User>::new(32, next_user_id);
/// tokio::spawn(actor.run(clock));
/// let user = client.create(fields).await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    /// * `next_id_fn` - Issues identifiers for newly created entities.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn issue_id(&self) -> T::Id {
        let mut id = (self.next_id_fn)();
        while self.position(&id).is_some() {
            id = (self.next_id_fn)();
        }
        id
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "User" instead of "user_dashboard::model::user::User"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.issue_id();

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(item) => {
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            info!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        debug!(entity_type, %id, "Update skipped, not found");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };
                    let item = &mut self.store[index];
                    if let Err(e) = item.on_update(update, &context) {
                        info!(entity_type, %id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(Some(item.clone())));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let removed = match self.position(&id) {
                        Some(index) => {
                            self.store.remove(index);
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            true
                        }
                        None => {
                            debug!(entity_type, %id, "Delete skipped, not found");
                            false
                        }
                    };
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Seed { items, respond_to } => {
                    let offered = items.len();
                    let mut inserted = 0;
                    for item in items {
                        if self.position(item.id()).is_none() {
                            self.store.push(item);
                            inserted += 1;
                        }
                    }
                    info!(entity_type, offered, inserted, size = self.store.len(), "Seeded");
                    let _ = respond_to.send(Ok(inserted));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
