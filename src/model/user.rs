use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a managed account.
///
/// Seeded records use small integers; records created at runtime receive
/// timestamp-derived values (see [`crate::user_actor::TimestampIds`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account status. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `active` nor `inactive`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for UserStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Represents one managed account.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
/// (see [`crate::user_actor::entity`]), allowing it to be held by a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// `id` and `created_at` are fixed at insertion; only the fields carried by
/// [`UserFields`] ever change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: NaiveDate,
}

impl User {
    /// The editable part of this record.
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            status: self.status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// The editable fields of a user. Used both as the create payload and as the
/// replacement payload for updates, and as the form draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
}

impl UserFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, status: UserStatus) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status,
        }
    }

    /// Names of required fields that are empty, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_text() {
        assert_eq!("active".parse::<UserStatus>(), Ok(UserStatus::Active));
        assert_eq!("inactive".parse::<UserStatus>(), Ok(UserStatus::Inactive));
        assert_eq!(UserStatus::Inactive.to_string(), "inactive");
        assert_eq!(
            "Active".parse::<UserStatus>(),
            Err(UnknownStatus("Active".into())),
            "status values are matched exactly"
        );
    }

    #[test]
    fn test_user_serializes_with_lowercase_status_and_iso_date() {
        let user = User {
            id: UserId(1),
            name: "Ahmed Mohammed".into(),
            email: "ahmed@example.com".into(),
            status: UserStatus::Active,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "active");
        assert_eq!(json["createdAt"], "2024-01-15");
    }

    #[test]
    fn test_default_fields_are_blank_and_active() {
        let fields = UserFields::default();
        assert_eq!(fields.status, UserStatus::Active);
        assert_eq!(fields.missing_required(), vec!["name", "email"]);
        assert!(UserFields::new("X", "x@x.com", UserStatus::Inactive)
            .missing_required()
            .is_empty());
    }
}
