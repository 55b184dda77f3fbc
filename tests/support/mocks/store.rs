// tests/support/mocks/store.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use taskboard::domain::errors::{DomainError, DomainResult};
use taskboard::domain::task::{NewTask, Task, TaskId, TaskRepository, TaskUpdate};
use taskboard::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate, Username};

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    tasks: BTreeMap<i64, Task>,
    next_user_id: i64,
    next_task_id: i64,
}

/// In-memory store with the same unique and foreign key rules as the
/// PostgreSQL schema. Implements both repository ports over shared state.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn task_count(&self) -> usize {
        self.state.lock().unwrap().tasks.len()
    }

    /// Remove a user without any referential checks, as a concurrent writer
    /// with a different policy might.
    pub fn force_remove_user(&self, id: i64) {
        self.state.lock().unwrap().users.remove(&id);
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::conflict("user with this username already exists"));
        }
        if state.users.values().any(|u| u.slug == new_user.slug) {
            return Err(DomainError::conflict("user slug already exists"));
        }

        state.next_user_id += 1;
        let user = User {
            id: UserId::new(state.next_user_id)?,
            username: new_user.username,
            firstname: new_user.firstname,
            lastname: new_user.lastname,
            age: new_user.age,
            slug: new_user.slug,
        };
        state.users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("user was not found"))?;
        update.apply_to(user);
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&id.0) {
            return Err(DomainError::not_found("user was not found"));
        }
        if state.tasks.values().any(|t| t.user_id == id) {
            return Err(DomainError::conflict("user still owns tasks"));
        }
        state.users.remove(&id.0);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Task>> {
        Ok(self.state.lock().unwrap().tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>> {
        Ok(self.state.lock().unwrap().tasks.get(&id.0).cloned())
    }

    async fn count_by_user(&self, user_id: UserId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.tasks.values().filter(|t| t.user_id == user_id).count() as u64)
    }

    async fn insert(&self, new_task: NewTask) -> DomainResult<Task> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&new_task.user_id.0) {
            return Err(DomainError::not_found("user was not found"));
        }
        if state.tasks.values().any(|t| t.slug == new_task.slug) {
            return Err(DomainError::conflict("task slug already exists"));
        }

        state.next_task_id += 1;
        let task = Task {
            id: TaskId::new(state.next_task_id)?,
            title: new_task.title,
            content: new_task.content,
            priority: new_task.priority,
            completed: new_task.completed,
            slug: new_task.slug,
            user_id: new_task.user_id,
        };
        state.tasks.insert(task.id.0, task.clone());
        Ok(task)
    }

    async fn update(&self, update: TaskUpdate) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("task was not found"))?;
        update.apply_to(task);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .tasks
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("task was not found"))
    }
}
