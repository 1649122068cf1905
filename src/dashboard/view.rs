//! Snapshot of everything a dashboard displays.

use crate::form::{FormController, FormMode};
use crate::model::{User, UserFields};
use crate::notification::Notification;
use crate::query::{Stats, StatusFilter};

/// The editor as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub open: bool,
    pub mode: FormMode,
    pub draft: UserFields,
}

impl From<&FormController> for FormView {
    fn from(form: &FormController) -> Self {
        Self {
            open: form.is_open(),
            mode: form.mode(),
            draft: form.draft().clone(),
        }
    }
}

/// Recomputed in full after every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub loading: bool,
    /// Records passing the current search and status filter, in store order.
    pub users: Vec<User>,
    /// Computed over every record, ignoring the filters.
    pub stats: Stats,
    pub search: String,
    pub status_filter: StatusFilter,
    pub form: FormView,
    pub notification: Option<Notification>,
}
