//! # Dashboard
//!
//! The owned application state of the user-management screen and its single entry point.
//!
//! Every user action is a [`Command`]. [`Dashboard::dispatch`] applies it (form edits,
//! store mutations, notifications) and answers with a freshly computed [`DashboardView`].
//! Nothing is cached between commands: the table and the statistics are derived from a new
//! store snapshot each time.

pub mod render;
pub mod source;
pub mod view;

pub use render::*;
pub use source::*;
pub use view::*;

use crate::clients::UserClient;
use crate::form::{FormController, Submission};
use crate::framework::ActorClient;
use crate::model::{UserId, UserStatus};
use crate::notification::Notifier;
use crate::query::{self, Stats, StatusFilter};
use crate::user_actor::UserError;
use tracing::{debug, info, instrument};

pub const USER_ADDED: &str = "User added successfully!";
pub const USER_UPDATED: &str = "User updated successfully!";
pub const USER_DELETED: &str = "User deleted successfully!";

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the editor to add a user.
    StartCreate,
    /// Open the editor on an existing user. Unknown IDs leave the editor closed.
    StartEdit(UserId),
    SetName(String),
    SetEmail(String),
    SetStatus(UserStatus),
    /// Close the editor without saving.
    Cancel,
    /// Save the draft: add in create mode, replace in edit mode.
    Submit,
    /// Remove a user right away. Always reports success.
    Delete(UserId),
    Search(String),
    FilterStatus(StatusFilter),
}

pub struct Dashboard {
    users: UserClient,
    notifier: Notifier,
    form: FormController,
    search: String,
    status_filter: StatusFilter,
    loading: bool,
}

impl Dashboard {
    /// A dashboard that has not loaded its records yet; it reports `loading` until
    /// [`Dashboard::load`] completes.
    pub fn new(users: UserClient, notifier: Notifier) -> Self {
        Self {
            users,
            notifier,
            form: FormController::new(),
            search: String::new(),
            status_filter: StatusFilter::All,
            loading: true,
        }
    }

    /// Fetches the initial records from `source` and adds them to the store.
    ///
    /// The dashboard leaves the loading state whether or not the source succeeded.
    #[instrument(skip(self, source))]
    pub async fn load<S: UserSource + ?Sized>(&mut self, source: &S) -> Result<DashboardView, UserError> {
        self.loading = true;
        let loaded = source.initial_users().await;
        self.loading = false;

        let inserted = self.users.seed(loaded?).await?;
        info!(inserted, "Initial users loaded");
        self.view().await
    }

    /// Applies one command and returns the recomputed view.
    ///
    /// Only two things can fail: a submit with a required field left empty
    /// ([`UserError::Validation`], nothing is saved and the editor stays open) and lost
    /// contact with the store actor.
    #[instrument(skip(self))]
    pub async fn dispatch(&mut self, command: Command) -> Result<DashboardView, UserError> {
        match command {
            Command::StartCreate => self.form.start_create(),
            Command::StartEdit(id) => match self.users.get(id).await? {
                Some(user) => self.form.start_edit(&user),
                None => debug!(%id, "Edit requested for unknown user"),
            },
            Command::SetName(name) => self.form.set_name(name),
            Command::SetEmail(email) => self.form.set_email(email),
            Command::SetStatus(status) => self.form.set_status(status),
            Command::Cancel => self.form.cancel(),
            Command::Submit => self.submit().await?,
            Command::Delete(id) => {
                let removed = self.users.remove(id).await?;
                debug!(%id, removed, "Delete");
                self.notifier.success(USER_DELETED);
            }
            Command::Search(term) => self.search = term,
            Command::FilterStatus(filter) => self.status_filter = filter,
        }
        self.view().await
    }

    async fn submit(&mut self) -> Result<(), UserError> {
        match self.form.prepare_submit()? {
            Submission::Insert(fields) => {
                let user = self.users.insert(fields).await?;
                info!(id = %user.id, "User added");
                self.notifier.success(USER_ADDED);
            }
            Submission::Replace(id, fields) => {
                let replaced = self.users.replace(id, fields).await?;
                info!(%id, replaced, "User updated");
                self.notifier.success(USER_UPDATED);
            }
        }
        self.form.cancel();
        Ok(())
    }

    /// Derives the view from a fresh store snapshot and the current inputs.
    pub async fn view(&self) -> Result<DashboardView, UserError> {
        let records = self.users.all().await?;
        Ok(DashboardView {
            loading: self.loading,
            users: query::filter(&records, &self.search, self.status_filter),
            stats: Stats::from_records(&records),
            search: self.search.clone(),
            status_filter: self.status_filter,
            form: FormView::from(&self.form),
            notification: self.notifier.current(),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
