//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ```bash
//! # Store lifecycle and user mutations
//! RUST_LOG=info cargo run
//!
//! # Every store request, dashboard command and notification
//! RUST_LOG=debug cargo run
//!
//! # Only the store actor
//! RUST_LOG=user_dashboard::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a dashboard session reads roughly like this:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO Seeded entity_type="User" offered=5 inserted=5 size=5
//! INFO load: Initial users loaded inserted=5
//! DEBUG Create entity_type="User" params=UserFields { name: "X", .. }
//! INFO dispatch{command=Submit}: User added id=1739786400000
//! DEBUG dispatch{command=Submit}: Notify seq=1 message=User added successfully! severity=Success
//! ```
//!
//! Calling [`setup_tracing`] twice panics; call it once from the binary, never from tests.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says which actor logged
        .compact()
        .init();
}
