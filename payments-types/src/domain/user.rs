//! User domain model.

use serde::{Deserialize, Serialize};

/// Unique identifier for a User.
///
/// User ids are assigned by the external user directory, so unlike payment
/// ids they are plain integers rather than generated UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a UserId from a raw integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Lifecycle status of a user.
///
/// Only ACTIVE users may create payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ACTIVE"),
            UserStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// A user of the payment system.
///
/// Users are immutable once constructed - they are owned by the external
/// user directory and only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Lifecycle status
    pub status: UserStatus,
}

impl User {
    /// Creates a new user.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, status: UserStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }

    /// Returns true if the user is in ACTIVE status.
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(11, "Ben", UserStatus::Active);
        assert_eq!(user.id, UserId::new(11));
        assert_eq!(user.name, "Ben");
        assert!(user.is_active());
    }

    #[test]
    fn test_inactive_user() {
        let user = User::new(22, "Ron", UserStatus::Inactive);
        assert!(!user.is_active());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(UserStatus::Active.to_string(), "ACTIVE");
        assert_eq!(UserStatus::Inactive.to_string(), "INACTIVE");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&UserStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
    }
}
