// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_USERNAME_LEN: usize = 64;
pub const MAX_PERSON_NAME_LEN: usize = 100;
pub const MAX_AGE: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("user id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login-style handle. Unique across users and the source of the user's slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        if value.chars().count() > MAX_USERNAME_LEN {
            return Err(DomainError::Validation(format!(
                "username must be at most {MAX_USERNAME_LEN} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First or last name. Display-only, may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_PERSON_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at most {MAX_PERSON_NAME_LEN} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(i32);

impl Age {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("age cannot be negative"));
        }
        if value > MAX_AGE {
            return Err(DomainError::Validation(format!(
                "age must be at most {MAX_AGE}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<Age> for i32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_must_be_positive() {
        assert!(UserId::new(0).is_err());
        assert!(UserId::new(-3).is_err());
        assert_eq!(i64::from(UserId::new(7).unwrap()), 7);
    }

    #[test]
    fn username_rejects_blank_and_overlong_values() {
        assert!(Username::new("   ").is_err());
        assert!(Username::new("x".repeat(MAX_USERNAME_LEN + 1)).is_err());
        assert_eq!(Username::new("Alice Smith").unwrap().as_str(), "Alice Smith");
    }

    #[test]
    fn person_name_allows_empty() {
        assert_eq!(PersonName::new("").unwrap().as_str(), "");
        assert!(PersonName::new("n".repeat(MAX_PERSON_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn age_rejects_negative() {
        assert!(matches!(Age::new(-1), Err(DomainError::Validation(_))));
        assert!(Age::new(MAX_AGE + 1).is_err());
        assert_eq!(Age::new(0).unwrap().value(), 0);
    }
}
