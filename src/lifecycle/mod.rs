//! # System Lifecycle
//!
//! Starting and stopping the actor behind the dashboard, plus logging setup.
//!
//! - [`DashboardSystem`] - spawns the user store actor with its clock context and shuts it down
//! - [`setup_tracing`] - initializes the `tracing` subscriber
//!
//! The clock is injected at `run()` time, not at construction, so tests can start the same
//! system with a [`FixedClock`](crate::user_actor::FixedClock).

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
