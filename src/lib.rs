//! # User Management Dashboard
//!
//! > **An in-memory user directory behind a single-screen dashboard.**
//!
//! Records live in a resource actor: one Tokio task owns the ordered list of users and
//! answers CRUD requests over a channel. The dashboard on top of it keeps the UI state
//! (search term, status filter, add/edit form, transient notification) and recomputes
//! what is shown after every command.
//!
//! ## 🏗️ Layers
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor<T>`](framework::ResourceActor) that stores any
//! [`ActorEntity`](framework::ActorEntity) in insertion order, and the
//! [`ResourceClient<T>`](framework::ResourceClient) that talks to it.
//!
//! ### 2. The Store ([`user_actor`], [`clients`], [`model`])
//! [`User`](model::User) as an entity, its identifier generator and clock, and the
//! [`UserClient`](clients::UserClient) with the store operations (`insert`, `replace`,
//! `remove`, `all`).
//!
//! ### 3. The Screen ([`query`], [`form`], [`notification`], [`dashboard`])
//! - [`query`] - search and status filtering, aggregate statistics
//! - [`form`] - the add/edit draft and its validation
//! - [`notification`] - one auto-dismissing message at a time
//! - [`dashboard`] - the [`Command`](dashboard::Command) reducer, view and text rendering
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`DashboardSystem`](lifecycle::DashboardSystem) spawns and shuts down the store actor;
//! [`Config`](config::Config) reads timings from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Scripted session with info logs
//! RUST_LOG=info cargo run
//!
//! # Skip the simulated fetch delay
//! DASHBOARD_LOAD_DELAY_MS=0 cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! Dashboard behavior can be tested without a running actor through
//! [`framework::mock::MockClient`]; timing-dependent tests use Tokio's paused clock.

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod form;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notification;
pub mod query;
pub mod user_actor;
