// tests/support/mocks/stale.rs
use std::sync::Arc;

use async_trait::async_trait;
use taskboard::domain::errors::DomainResult;
use taskboard::domain::slug::Slug;
use taskboard::domain::user::{
    Age, NewUser, PersonName, User, UserId, UserRepository, UserUpdate, Username,
};

use super::store::InMemoryStore;

/// Wraps the in-memory store but answers the service-level lookups as if a
/// concurrent writer changed the data right after they ran: usernames always
/// look free and every user id looks present.
pub struct StalePrecheckStore {
    inner: Arc<InMemoryStore>,
}

impl StalePrecheckStore {
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl UserRepository for StalePrecheckStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        UserRepository::list(self.inner.as_ref()).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(Some(User {
            id,
            username: Username::new("ghost")?,
            firstname: PersonName::default(),
            lastname: PersonName::default(),
            age: Age::new(0)?,
            slug: Slug::new("ghost")?,
        }))
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        UserRepository::insert(self.inner.as_ref(), new_user).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<()> {
        UserRepository::update(self.inner.as_ref(), update).await
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        UserRepository::delete(self.inner.as_ref(), id).await
    }
}
