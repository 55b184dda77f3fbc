// src/domain/user/entity.rs
use crate::domain::slug::Slug;
use crate::domain::user::value_objects::{Age, PersonName, UserId, Username};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub firstname: PersonName,
    pub lastname: PersonName,
    pub age: Age,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub firstname: PersonName,
    pub lastname: PersonName,
    pub age: Age,
    pub slug: Slug,
}

/// Partial overwrite of a user's mutable fields. `username` and `slug` are fixed
/// at creation and have no counterpart here.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub firstname: Option<PersonName>,
    pub lastname: Option<PersonName>,
    pub age: Option<Age>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            firstname: None,
            lastname: None,
            age: None,
        }
    }

    pub fn with_firstname(mut self, firstname: PersonName) -> Self {
        self.firstname = Some(firstname);
        self
    }

    pub fn with_lastname(mut self, lastname: PersonName) -> Self {
        self.lastname = Some(lastname);
        self
    }

    pub fn with_age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.firstname.is_none() && self.lastname.is_none() && self.age.is_none()
    }

    /// Apply the provided fields to an in-memory record.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(firstname) = &self.firstname {
            user.firstname = firstname.clone();
        }
        if let Some(lastname) = &self.lastname {
            user.lastname = lastname.clone();
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}
