//! Derived views over the record store: the filtered table and the summary statistics.
//!
//! Both are pure functions of their inputs and are recomputed after every change. Each is
//! a single linear pass.

use crate::model::{User, UserStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which statuses the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, status: UserStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == UserStatus::Active,
            StatusFilter::Inactive => status == UserStatus::Inactive,
        }
    }
}

impl From<UserStatus> for StatusFilter {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => StatusFilter::Active,
            UserStatus::Inactive => StatusFilter::Inactive,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        })
    }
}

/// Returned when a string is not `all`, `active` or `inactive`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status filter: {0:?}")]
pub struct UnknownFilter(pub String);

impl FromStr for StatusFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// True when `term` occurs in the name or the email, ignoring case.
/// An empty term matches every record.
pub fn matches_term(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
}

/// Records matching both the search term and the status filter, in store order.
pub fn filter(records: &[User], term: &str, status: StatusFilter) -> Vec<User> {
    records
        .iter()
        .filter(|user| matches_term(user, term) && status.matches(user.status))
        .cloned()
        .collect()
}

/// Counts over the full, unfiltered record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Share of active records in whole percent, rounded half up. Zero when empty.
    pub active_percentage: u32,
}

impl Stats {
    pub fn from_records(records: &[User]) -> Self {
        let active = records.iter().filter(|user| user.is_active()).count();
        let total = records.len();
        Self {
            total,
            active,
            inactive: total - active,
            active_percentage: percentage(active, total),
        }
    }
}

/// `round(part / whole * 100)` with ties rounded up, computed on integers.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part as u64 * 200 + whole as u64) / (2 * whole as u64);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_users, UserId};
    use chrono::NaiveDate;

    fn user(id: u64, name: &str, email: &str, status: UserStatus) -> User {
        User {
            id: UserId(id),
            name: name.into(),
            email: email.into(),
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn ids(users: &[User]) -> Vec<u64> {
        users.iter().map(|u| u.id.0).collect()
    }

    #[test]
    fn test_empty_term_and_all_is_identity() {
        let seed = sample_users().unwrap();
        assert_eq!(filter(&seed, "", StatusFilter::All), seed);
    }

    #[test]
    fn test_term_matches_name_or_email_case_insensitively() {
        let seed = sample_users().unwrap();
        // Sara Ali by name, Ali Reza by name and by ali@example.com.
        assert_eq!(ids(&filter(&seed, "ali", StatusFilter::All)), vec![2, 5]);
        assert_eq!(ids(&filter(&seed, "ALI", StatusFilter::All)), vec![2, 5]);
        // Only emails contain "@".
        assert_eq!(ids(&filter(&seed, "mohammed@", StatusFilter::All)), vec![3]);
        assert_eq!(ids(&filter(&seed, "mohammed", StatusFilter::All)), vec![1, 3]);
        assert!(filter(&seed, "nobody", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_is_anded_with_term() {
        let seed = sample_users().unwrap();
        assert_eq!(ids(&filter(&seed, "", StatusFilter::Active)), vec![1, 3, 4]);
        assert_eq!(ids(&filter(&seed, "", StatusFilter::Inactive)), vec![2, 5]);
        assert_eq!(ids(&filter(&seed, "ali", StatusFilter::Active)), Vec::<u64>::new());
        assert_eq!(ids(&filter(&seed, "a", StatusFilter::Inactive)), vec![2, 5]);
    }

    #[test]
    fn test_filter_output_is_an_ordered_subset_satisfying_both_predicates() {
        let records = vec![
            user(10, "Zed", "zed@zz.io", UserStatus::Active),
            user(3, "Amy", "amy@AZ.io", UserStatus::Inactive),
            user(7, "Bob", "bob@az.io", UserStatus::Active),
            user(1, "Liz", "liz@example.com", UserStatus::Active),
        ];
        for term in ["", "z", "AZ", "o", "example", "q"] {
            for status in [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive] {
                let out = filter(&records, term, status);
                let mut cursor = records.iter();
                for found in &out {
                    assert!(cursor.any(|r| r == found), "order or membership broken");
                    assert!(matches_term(found, term) && status.matches(found.status));
                }
                let expected = records
                    .iter()
                    .filter(|r| matches_term(r, term) && status.matches(r.status))
                    .count();
                assert_eq!(out.len(), expected);
            }
        }
    }

    #[test]
    fn test_stats_for_seed() {
        let stats = Stats::from_records(&sample_users().unwrap());
        assert_eq!(
            stats,
            Stats {
                total: 5,
                active: 3,
                inactive: 2,
                active_percentage: 60
            }
        );
    }

    #[test]
    fn test_percentage_is_zero_for_empty_store() {
        assert_eq!(Stats::from_records(&[]), Stats::default());
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(4, 6), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        // 12.5 and 37.5 are exact ties and round up.
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(3, 8), 38);
        // 57.5 exactly; a float computation lands just below the tie and gives 57.
        assert_eq!(percentage(23, 40), 58);
        assert_eq!(percentage(0, 4), 0);
        assert_eq!(percentage(4, 4), 100);
    }

    #[test]
    fn test_status_filter_parses() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("inactive".parse::<StatusFilter>(), Ok(StatusFilter::Inactive));
        assert!("everyone".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::from(UserStatus::Active), StatusFilter::Active);
    }
}
