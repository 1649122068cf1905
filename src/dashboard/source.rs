//! Where the dashboard's initial records come from.

use crate::model::{sample_users, User};
use crate::user_actor::UserError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Provides the records a dashboard starts with. Completion of the returned future is the
/// "loaded" signal; an empty list is a valid answer.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn initial_users(&self) -> Result<Vec<User>, UserError>;
}

/// Stand-in for a backend: waits a fixed delay, then answers with the five sample accounts.
#[derive(Debug, Clone, Copy)]
pub struct SampleSource {
    delay: Duration,
}

impl SampleSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl UserSource for SampleSource {
    async fn initial_users(&self) -> Result<Vec<User>, UserError> {
        tokio::time::sleep(self.delay).await;
        let users = sample_users()?;
        info!(count = users.len(), delay = ?self.delay, "Sample users loaded");
        Ok(users)
    }
}

/// A source with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

#[async_trait]
impl UserSource for EmptySource {
    async fn initial_users(&self) -> Result<Vec<User>, UserError> {
        Ok(Vec::new())
    }
}
