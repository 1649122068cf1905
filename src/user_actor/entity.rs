//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`User`] to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! The store is permissive: it accepts any fields it is given. Required-field checks belong
//! to the form (see [`crate::form`]).

use crate::framework::ActorEntity;
use crate::model::{User, UserFields, UserId};
use crate::user_actor::{SharedClock, UserError};

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserFields;
    type Update = UserFields;
    type Context = SharedClock;
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Builds a new record dated "today" according to the injected clock.
    fn from_create_params(id: UserId, params: UserFields, clock: &SharedClock) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            status: params.status,
            created_at: clock.today(),
        })
    }

    /// Overwrites `name`, `email` and `status`. `id` and `created_at` are never touched.
    fn on_update(&mut self, update: UserFields, _clock: &SharedClock) -> Result<(), UserError> {
        self.name = update.name;
        self.email = update.email;
        self.status = update.status;
        Ok(())
    }
}
