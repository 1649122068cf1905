//! The add/edit form: a draft of the editable fields and an optional edit target.
//!
//! The controller itself never touches the store. [`FormController::prepare_submit`] turns
//! a valid draft into a [`Submission`] that the caller applies; once the store accepted it,
//! the caller resets the form with [`FormController::cancel`].

use crate::model::{User, UserFields, UserId, UserStatus};
use crate::user_actor::UserError;

/// Whether submitting adds a record or replaces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(UserId),
}

/// What a valid submit asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Insert(UserFields),
    Replace(UserId, UserFields),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    draft: UserFields,
    mode: FormMode,
    open: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the editor with a blank draft in create mode.
    pub fn start_create(&mut self) {
        self.draft = UserFields::default();
        self.mode = FormMode::Create;
        self.open = true;
    }

    /// Opens the editor on a copy of `user`'s fields, targeting its ID.
    pub fn start_edit(&mut self, user: &User) {
        self.draft = user.fields();
        self.mode = FormMode::Edit(user.id);
        self.open = true;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_status(&mut self, status: UserStatus) {
        self.draft.status = status;
    }

    /// Discards the draft and the edit target and closes the editor.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Checks the required fields and describes the store change a submit makes.
    /// The draft is left as is; on error the editor stays open with the user's input.
    pub fn prepare_submit(&self) -> Result<Submission, UserError> {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            return Err(UserError::Validation(format!(
                "required field missing: {}",
                missing.join(", ")
            )));
        }
        Ok(match self.mode {
            FormMode::Create => Submission::Insert(self.draft.clone()),
            FormMode::Edit(id) => Submission::Replace(id, self.draft.clone()),
        })
    }

    pub fn draft(&self) -> &UserFields {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
