// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{tasks::TaskCommandService, users::UserCommandService},
        ports::util::SlugGenerator,
        queries::{tasks::TaskQueryService, users::UserQueryService},
    },
    domain::{task::TaskRepository, user::UserRepository},
};

/// Command and query services wired against one pair of repositories.
pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub task_commands: Arc<TaskCommandService>,
    pub task_queries: Arc<TaskQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&task_repo),
            Arc::clone(&slugger),
        ));
        let task_commands = Arc::new(TaskCommandService::new(
            Arc::clone(&task_repo),
            Arc::clone(&user_repo),
            Arc::clone(&slugger),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let task_queries = Arc::new(TaskQueryService::new(Arc::clone(&task_repo)));

        Self {
            user_commands,
            user_queries,
            task_commands,
            task_queries,
        }
    }
}
