// src/application/commands/tasks/service.rs
use std::sync::Arc;

use crate::{
    application::ports::util::SlugGenerator,
    domain::{task::TaskRepository, user::UserRepository},
};

pub struct TaskCommandService {
    pub(super) task_repo: Arc<dyn TaskRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl TaskCommandService {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        user_repo: Arc<dyn UserRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            task_repo,
            user_repo,
            slugger,
        }
    }
}
