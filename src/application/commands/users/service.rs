// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::util::SlugGenerator,
    domain::{task::TaskRepository, user::UserRepository},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) task_repo: Arc<dyn TaskRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            slugger,
        }
    }
}
