//! # User Client
//!
//! High-level API for the record store. It wraps a `ResourceClient<User>` and exposes the
//! store contract in domain terms: insert, replace, remove, all.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{User, UserFields, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::ActorCommunication(e.to_string())
    }
}

impl UserClient {
    /// Appends a new record with a fresh ID dated today, and returns it.
    #[instrument(skip(self))]
    pub async fn insert(&self, fields: UserFields) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(fields).await.map_err(Self::map_error)
    }

    /// Overwrites the editable fields of `id`. Returns `false`, changing nothing, when no
    /// record has that ID.
    #[instrument(skip(self))]
    pub async fn replace(&self, id: UserId, fields: UserFields) -> Result<bool, UserError> {
        debug!("Sending request");
        self.inner
            .update(id, fields)
            .await
            .map(|updated| updated.is_some())
            .map_err(Self::map_error)
    }

    /// Removes `id` if present and reports whether a record was removed.
    pub async fn remove(&self, id: UserId) -> Result<bool, UserError> {
        self.delete(id).await
    }

    /// Every record in insertion order.
    pub async fn all(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }

    /// Bulk-loads existing records, keeping their IDs and dates.
    #[instrument(skip(self, users), fields(count = users.len()))]
    pub async fn seed(&self, users: Vec<User>) -> Result<usize, UserError> {
        debug!("Sending request");
        self.inner.seed(users).await.map_err(Self::map_error)
    }
}
