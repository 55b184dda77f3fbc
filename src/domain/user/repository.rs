// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in store-native order.
    async fn list(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// Fails with `Conflict` when the username or slug is already taken.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Fails with `NotFound` when no row matches `update.id`.
    async fn update(&self, update: UserUpdate) -> DomainResult<()>;

    /// Fails with `NotFound` when no row matches, and with `Conflict` while
    /// tasks still reference the user.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
