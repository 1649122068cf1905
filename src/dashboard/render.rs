//! Plain-text rendering of a [`DashboardView`].

use crate::dashboard::view::{DashboardView, FormView};
use crate::form::FormMode;
use crate::notification::Severity;
use chrono::NaiveDate;
use std::fmt;

pub const TITLE: &str = "User Management Dashboard";
pub const EMPTY_STATE: &str = "No users found";
pub const LOADING: &str = "Loading users...";

/// Display form of a creation date. Storage keeps ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        if let Some(notification) = &self.notification {
            let marker = match notification.severity {
                Severity::Success => "[ok]",
                Severity::Error => "[error]",
            };
            writeln!(f, "{marker} {}", notification.message)?;
        }

        let stats = &self.stats;
        writeln!(
            f,
            "Total Users: {} | Active Users: {} | Inactive Users: {} | Activity Rate: {}%",
            stats.total, stats.active, stats.inactive, stats.active_percentage
        )?;
        writeln!(f, "Search: {:?} | Status: {}", self.search, self.status_filter)?;
        writeln!(f)?;

        if self.loading {
            writeln!(f, "{LOADING}")?;
        } else if self.users.is_empty() {
            writeln!(f, "{EMPTY_STATE}")?;
        } else {
            writeln!(f, "{:<20} {:<24} {:<9} {}", "Name", "Email", "Status", "Created")?;
            for user in &self.users {
                writeln!(
                    f,
                    "{:<20} {:<24} {:<9} {}",
                    user.name,
                    user.email,
                    user.status.label(),
                    format_date(user.created_at)
                )?;
            }
        }

        if self.form.open {
            writeln!(f)?;
            write!(f, "{}", self.form)?;
        }
        Ok(())
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, action) = match self.mode {
            FormMode::Create => ("Add New User", "Add"),
            FormMode::Edit(_) => ("Edit User", "Update"),
        };
        writeln!(f, "{title}")?;
        writeln!(f, "  Name:   {}", self.draft.name)?;
        writeln!(f, "  Email:  {}", self.draft.email)?;
        writeln!(f, "  Status: {}", self.draft.status.label())?;
        writeln!(f, "  [Cancel] [{action}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_users, UserFields, UserId, UserStatus};
    use crate::query::{Stats, StatusFilter};

    fn view() -> DashboardView {
        let users = sample_users().unwrap();
        DashboardView {
            loading: false,
            stats: Stats::from_records(&users),
            users,
            search: String::new(),
            status_filter: StatusFilter::All,
            form: FormView {
                open: false,
                mode: FormMode::Create,
                draft: UserFields::default(),
            },
            notification: None,
        }
    }

    #[test]
    fn test_format_date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(format_date(date), "05/02/2024");
    }

    #[test]
    fn test_renders_stats_and_rows() {
        let text = view().to_string();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Total Users: 5 | Active Users: 3 | Inactive Users: 2 | Activity Rate: 60%"));
        assert!(text.contains("Sara Ali"));
        assert!(text.contains("15/01/2024"));
        assert!(!text.contains(EMPTY_STATE));
    }

    #[test]
    fn test_renders_empty_and_loading_states() {
        let mut empty = view();
        empty.users.clear();
        assert!(empty.to_string().contains(EMPTY_STATE));

        let mut loading = view();
        loading.loading = true;
        let text = loading.to_string();
        assert!(text.contains(LOADING));
        assert!(!text.contains(EMPTY_STATE));
    }

    #[test]
    fn test_renders_editor_title_by_mode() {
        let mut editing = view();
        editing.form = FormView {
            open: true,
            mode: FormMode::Edit(UserId(1)),
            draft: UserFields::new("Ahmed Mohammed", "ahmed@example.com", UserStatus::Inactive),
        };
        let text = editing.to_string();
        assert!(text.contains("Edit User"));
        assert!(text.contains("[Update]"));
        assert!(text.contains("Status: Inactive"));

        editing.form.mode = FormMode::Create;
        assert!(editing.to_string().contains("Add New User"));
    }
}
