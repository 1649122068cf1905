//! Scripted dashboard session: loads the sample users, then adds, edits, searches,
//! filters and deletes, printing the screen after each step.
//!
//! Timings come from the environment (see [`user_dashboard::config`]).

use user_dashboard::config::Config;
use user_dashboard::dashboard::{Command, Dashboard, DashboardView, SampleSource};
use user_dashboard::lifecycle::{setup_tracing, DashboardSystem};
use user_dashboard::model::{UserId, UserStatus};
use user_dashboard::notification::Notifier;
use user_dashboard::query::StatusFilter;
use tracing::{error, info, Instrument};

fn show(step: &str, view: &DashboardView) {
    println!("=== {step} ===");
    println!("{view}");
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting user dashboard");

    let system = DashboardSystem::new(&config);
    let mut dashboard = Dashboard::new(
        system.user_client.clone(),
        Notifier::new(config.notification_ttl),
    );

    show("Loading", &dashboard.view().await.map_err(|e| e.to_string())?);

    let source = SampleSource::new(config.load_delay);
    let span = tracing::info_span!("initial_load");
    let view = async { dashboard.load(&source).await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    show("Loaded", &view);

    let script = [
        ("Open add form", Command::StartCreate),
        ("Type name", Command::SetName("Layla Hassan".into())),
        ("Submit without email", Command::Submit),
        ("Type email", Command::SetEmail("layla@example.com".into())),
        ("Submit", Command::Submit),
        ("Edit Ahmed", Command::StartEdit(UserId(1))),
        ("Mark inactive", Command::SetStatus(UserStatus::Inactive)),
        ("Save edit", Command::Submit),
        ("Search \"ali\"", Command::Search("ali".into())),
        ("Only active", Command::FilterStatus(StatusFilter::Active)),
        ("Clear search", Command::Search(String::new())),
        ("Delete Sara", Command::Delete(UserId(2))),
    ];

    for (step, command) in script {
        match dashboard.dispatch(command).await {
            Ok(view) => show(step, &view),
            Err(e) => {
                error!(error = %e, step, "Command rejected");
                println!("=== {step} ===\n[error] {e}\n");
            }
        }
    }

    // Let the last notification expire so the final screen shows its dismissal.
    tokio::time::sleep(config.notification_ttl).await;
    show("Later", &dashboard.view().await.map_err(|e| e.to_string())?);

    // The dashboard holds a client clone; the actor only stops once it is gone.
    drop(dashboard);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
