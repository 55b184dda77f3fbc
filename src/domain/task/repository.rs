// src/domain/task/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::task::{
    entity::{NewTask, Task, TaskUpdate},
    value_objects::TaskId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Task>>;

    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>>;

    async fn count_by_user(&self, user_id: UserId) -> DomainResult<u64>;

    /// Fails with `Conflict` on a duplicate slug and with `NotFound` when the
    /// owning user does not exist at insertion time.
    async fn insert(&self, new_task: NewTask) -> DomainResult<Task>;

    async fn update(&self, update: TaskUpdate) -> DomainResult<()>;

    async fn delete(&self, id: TaskId) -> DomainResult<()>;
}
