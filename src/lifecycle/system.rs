use crate::clients::UserClient;
use crate::config::Config;
use crate::user_actor::{SharedClock, SystemClock};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the running user store actor and hands out its client.
///
/// Every clone of [`DashboardSystem::user_client`] keeps the actor's channel open, so
/// dashboards built on it must be dropped before [`DashboardSystem::shutdown`] can finish.
///
/// ```rust,ignore
/// let system = DashboardSystem::new(&config);
/// let mut dashboard = Dashboard::new(system.user_client.clone(), Notifier::new(config.notification_ttl));
/// dashboard.load(&SampleSource::new(config.load_delay)).await?;
/// drop(dashboard);
/// system.shutdown().await?;
/// ```
pub struct DashboardSystem {
    /// Client for the user store actor
    pub user_client: UserClient,

    /// Task handles of the running actors
    handles: Vec<JoinHandle<()>>,
}

impl DashboardSystem {
    /// Starts the user store, dating new records with the system clock (UTC).
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Starts the user store with an injected clock.
    pub fn with_clock(config: &Config, clock: SharedClock) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(config.channel_capacity);
        let user_handle = tokio::spawn(user_actor.run(clock));

        info!(capacity = config.channel_capacity, "Dashboard system started");
        Self {
            user_client,
            handles: vec![user_handle],
        }
    }

    /// Drops the system's client and waits for every actor to exit.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Actors exit once every sender of their channel is gone.
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
