//! The sample accounts a fresh dashboard starts with.

use crate::model::{User, UserId, UserStatus};
use crate::user_actor::UserError;
use chrono::NaiveDate;

const SAMPLE: [(u64, &str, &str, UserStatus, &str); 5] = [
    (1, "Ahmed Mohammed", "ahmed@example.com", UserStatus::Active, "2024-01-15"),
    (2, "Sara Ali", "sara@example.com", UserStatus::Inactive, "2024-01-20"),
    (3, "Mohammed Khaled", "mohammed@example.com", UserStatus::Active, "2024-01-25"),
    (4, "Fatima Hassan", "fatima@example.com", UserStatus::Active, "2024-02-01"),
    (5, "Ali Reza", "ali@example.com", UserStatus::Inactive, "2024-02-05"),
];

/// The five sample accounts, in display order.
pub fn sample_users() -> Result<Vec<User>, UserError> {
    SAMPLE
        .iter()
        .map(|&(id, name, email, status, created)| {
            let created_at = created
                .parse::<NaiveDate>()
                .map_err(|e| UserError::Source(format!("bad sample date {created}: {e}")))?;
            Ok(User {
                id: UserId(id),
                name: name.to_string(),
                email: email.to_string(),
                status,
                created_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_users_match_fixture() {
        let users = sample_users().unwrap();
        assert_eq!(users.len(), 5);
        let ids: Vec<u64> = users.iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(users[1].name, "Sara Ali");
        assert_eq!(users[1].status, UserStatus::Inactive);
        assert_eq!(users[4].created_at.to_string(), "2024-02-05");
        assert_eq!(users.iter().filter(|u| u.is_active()).count(), 3);
    }
}
