//! Transient status messages.
//!
//! At most one notification is visible. Each [`Notifier::notify`] replaces the current one
//! and schedules its dismissal; the dismissal task of a superseded message is aborted and,
//! even if it has already woken up, it only clears the message it was scheduled for.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Controls presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    seq: u64,
}

pub struct Notifier {
    ttl: Duration,
    state: Arc<watch::Sender<Option<Notification>>>,
    seq: u64,
    dismissal: Option<JoinHandle<()>>,
}

impl Notifier {
    /// A notifier whose messages clear `ttl` after they were shown.
    pub fn new(ttl: Duration) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            ttl,
            state: Arc::new(state),
            seq: 0,
            dismissal: None,
        }
    }

    /// Shows `message`, superseding whatever was visible, and restarts the countdown.
    /// Must be called inside a Tokio runtime.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        if let Some(pending) = self.dismissal.take() {
            pending.abort();
        }
        self.seq += 1;
        let seq = self.seq;
        let notification = Notification {
            message: message.into(),
            severity,
            seq,
        };
        debug!(seq, message = %notification.message, ?severity, "Notify");
        self.state.send_replace(Some(notification));

        let state = Arc::clone(&self.state);
        let ttl = self.ttl;
        self.dismissal = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let cleared = state.send_if_modified(|current| match current {
                Some(shown) if shown.seq == seq => {
                    *current = None;
                    true
                }
                _ => false,
            });
            debug!(seq, cleared, "Notification expired");
        }));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    /// The notification visible right now, if any.
    pub fn current(&self) -> Option<Notification> {
        self.state.borrow().clone()
    }

    /// Follow the visible notification as it is shown and cleared.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.state.subscribe()
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(pending) = self.dismissal.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const TTL: Duration = Duration::from_millis(3000);

    fn message(notifier: &Notifier) -> Option<String> {
        notifier.current().map(|n| n.message)
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_clears_after_ttl() {
        let mut notifier = Notifier::new(TTL);
        assert!(notifier.current().is_none());

        notifier.success("saved");
        let shown = notifier.current().unwrap();
        assert_eq!(shown.message, "saved");
        assert_eq!(shown.severity, Severity::Success);

        sleep(Duration::from_millis(2999)).await;
        assert_eq!(message(&notifier), Some("saved".into()));

        sleep(Duration::from_millis(2)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_notification_supersedes_and_owns_its_timer() {
        let mut notifier = Notifier::new(TTL);

        notifier.success("first");
        sleep(Duration::from_millis(2000)).await;
        notifier.notify("second", Severity::Error);
        assert_eq!(message(&notifier), Some("second".into()));

        // The first message's deadline has passed; the second is still within its own.
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(message(&notifier), Some("second".into()));

        sleep(Duration::from_millis(1501)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_show_and_clear() {
        let mut notifier = Notifier::new(TTL);
        let mut updates = notifier.subscribe();

        notifier.success("hello");
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().as_ref().map(|n| n.message.as_str()), Some("hello"));

        updates.changed().await.unwrap();
        assert!(updates.borrow_and_update().is_none());
    }
}
